//! Demo command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::DemoConfig;
use crate::demo::Demo;
use crate::error::{CliError, CliResult};

/// Arguments for the demo command
#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Configuration file (default: built-in scenario)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Let the out-of-range access escape uncaught
    #[arg(long)]
    pub strict: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DemoArgs {
    /// Execute the demo command
    pub fn execute(&self) -> CliResult<()> {
        self.init_logging()?;

        log::info!("Starting demonstration");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let report = Demo::new(config).run(&mut out)?;
        log::debug!("Report: {:?}", report);

        writeln!(out, "Demonstration finished successfully")?;
        if report.live_after == 0 {
            writeln!(out, "All dynamically allocated memory has been released")?;
        }
        out.flush().context("Failed to flush stdout")?;
        Ok(())
    }

    /// Resolve the configuration, applying command-line overrides
    pub fn load_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        if self.strict {
            config.demo.strict = true;
        }
        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .ok();
        }

        Ok(())
    }
}
