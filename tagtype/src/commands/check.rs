use clap::Args;
use eyre::Result;
use tagtype_registry::ComponentRegistry;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub project: ProjectArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (file, config) = self.project.load()?;
        let registry = ComponentRegistry::from_file(&config.registry).unwrap_or_exit();

        let report = ops::check(file.path(), &config, &registry).unwrap_or_exit();
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
