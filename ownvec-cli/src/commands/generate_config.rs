//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::config::DemoConfig;
use crate::error::CliResult;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> CliResult<()> {
        use std::fs;

        println!("Generating demonstration configuration...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the samples, probe values and range");
        println!("2. Validate your configuration:");
        println!("   ownvec validate --config {}", self.output.display());
        println!("3. Run the demonstration with it:");
        println!("   ownvec demo --config {}", self.output.display());

        Ok(())
    }

    /// Default configuration with a short header
    fn generate_template(&self) -> Result<String> {
        let body = DemoConfig::default().to_toml()?;
        Ok(format!(
            "# ownvec demonstration configuration\n\
             # `strict = true` lets the out-of-range read fail the run\n\n{body}"
        ))
    }
}
