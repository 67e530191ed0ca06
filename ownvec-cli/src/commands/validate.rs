//! Validate command implementation

use clap::Args;
use std::path::PathBuf;

use crate::config::DemoConfig;
use crate::error::CliResult;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        println!("Validating configuration: {}", self.config.display());

        let config = DemoConfig::from_file(&self.config)?;
        match config.validate() {
            Ok(()) => {
                println!("✓ Configuration is valid!");
                println!("  Samples: {}", config.demo.samples.len());
                println!("  Range: [{}, {}]", config.range.min, config.range.max);
                println!("  Probe index: {}", config.demo.probe_index);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
