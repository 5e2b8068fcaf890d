use clap::Args;
use eyre::Result;
use tagtype_registry::ComponentRegistry;

use super::{ProjectArgs, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the generated declarations instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (_, config) = self.project.load()?;
        let registry = ComponentRegistry::from_file(&config.registry).unwrap_or_exit();

        let report = ops::generate(
            &config,
            &registry,
            GenerateOptions {
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
