//! CLI command implementations

use clap::Subcommand;

use crate::error::CliResult;

pub mod demo;
pub mod generate_config;
pub mod list;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the owning array and error handling demonstration
    Demo(demo::DemoArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file with the default scenario
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the error kinds the demonstration can raise
    Errors(list::ListErrorsArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Demo(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Errors(args) => args.execute(),
            },
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
