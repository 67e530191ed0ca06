//! ownvec CLI library
//!
//! This library provides the command-line demonstration of the
//! [`ownvec_core::OwningArray`] container and its error taxonomy.

pub mod commands;
pub mod config;
pub mod demo;
pub mod error;
pub mod sample;

pub use error::{CliError, CliResult};
