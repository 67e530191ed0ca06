//! ownvec command-line entry point

use clap::Parser;
use ownvec_cli::commands::Commands;
use std::process::ExitCode;

/// Demonstrates an append-only owning array and its error taxonomy
#[derive(Debug, Parser)]
#[command(name = "ownvec", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("unexpected error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_demo_flags() {
        let cli = Cli::try_parse_from(["ownvec", "demo", "--strict", "-vv"]).unwrap();
        match cli.command {
            Commands::Demo(args) => {
                assert!(args.strict);
                assert_eq!(args.verbose, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
