mod check;
mod completions;
mod generate;

use std::path::PathBuf;

use camino::Utf8PathBuf;
use check::CheckCommand;
use clap::{ArgAction, Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use tagtype_codegen_dts::GenerateError;
use tagtype_registry::{BuildConfig, BuildConfigFile, CONFIG_FILE_NAME};

use crate::ops::ConfigOverrides;

/// Extension trait for exiting on input errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagtype_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, GenerateError> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "tagtype")]
#[command(version)]
#[command(about = "Generate TypeScript declarations for custom element components")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate components.d.ts from the component registry
    Generate(GenerateCommand),

    /// Validate configuration and registry without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Options shared by commands that load a project.
#[derive(Args)]
pub struct ProjectArgs {
    /// Path to tagtype.toml (defaults are used if ./tagtype.toml is absent)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Component registry (overrides tagtype.toml)
    #[arg(short, long)]
    pub registry: Option<Utf8PathBuf>,

    /// Source root (overrides tagtype.toml)
    #[arg(long)]
    pub src_dir: Option<Utf8PathBuf>,

    /// Extension collection to import; repeat to add several (overrides tagtype.toml)
    #[arg(long = "collection")]
    pub collections: Vec<String>,
}

impl ProjectArgs {
    /// Load the configuration file, then apply command-line overrides.
    pub fn load(&self) -> Result<(BuildConfigFile, BuildConfig)> {
        let file = if self.config.as_os_str() == CONFIG_FILE_NAME && !self.config.exists() {
            BuildConfigFile::defaults_in(".").unwrap_or_exit()
        } else {
            BuildConfigFile::open(&self.config).unwrap_or_exit()
        };

        let overrides = ConfigOverrides {
            src_dir: self.src_dir.clone(),
            registry: self.registry.clone(),
            collections: self.collections.clone(),
        };
        let config = overrides.apply(file.config().clone())?;
        Ok((file, config))
    }
}
