//! Fair billing CLI library.
//!
//! This crate provides the CLI interface for the fair billing report.

mod cli;
pub mod commands;
mod config;

pub use cli::Cli;
pub use config::{Config, OutputFormat};
