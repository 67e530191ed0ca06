//! List command implementation

use anyhow::Result;
use clap::Args;
use ownvec_core::DomainError;
use serde::Serialize;
use std::io::{self, Write};

use crate::error::CliResult;

/// Arguments for `list errors`
#[derive(Debug, Args)]
pub struct ListErrorsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One kind per line
    Text,
    /// JSON array of kinds
    Json,
}

/// Whether a kind belongs to the domain taxonomy or is a generic precondition failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Application-specific failure
    Domain,
    /// Precondition check failure
    Generic,
}

/// One row of the error catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorKindEntry {
    /// Kind identifier
    pub name: &'static str,
    /// Taxonomy category
    pub category: Category,
    /// Message, or message template for generic kinds
    pub message: &'static str,
}

/// Every error kind, domain kinds first
pub fn error_catalog() -> Vec<ErrorKindEntry> {
    let mut entries: Vec<ErrorKindEntry> = DomainError::ALL
        .iter()
        .map(|kind| ErrorKindEntry {
            name: kind.name(),
            category: Category::Domain,
            message: kind.message(),
        })
        .collect();
    entries.push(ErrorKindEntry {
        name: "InvalidArgument",
        category: Category::Generic,
        message: "invalid argument: {reason}",
    });
    entries.push(ErrorKindEntry {
        name: "IndexOutOfRange",
        category: Category::Generic,
        message: "index {index} is out of range for array of size {size}",
    });
    entries
}

impl ListErrorsArgs {
    /// Execute the list errors command
    pub fn execute(&self) -> CliResult<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Render the catalog in the selected format
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let catalog = error_catalog();
        match self.format {
            OutputFormat::Text => {
                for entry in &catalog {
                    let category = match entry.category {
                        Category::Domain => "domain",
                        Category::Generic => "generic",
                    };
                    writeln!(out, "{:<24} {:<8} {}", entry.name, category, entry.message)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &catalog)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}
