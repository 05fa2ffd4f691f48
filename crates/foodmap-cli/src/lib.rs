//! Foodmap CLI library - command definitions, configuration, and output
//! formatting for the `foodmap` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use config::{Config, OutputFormat, Settings};
pub use error::{CliError, Result};
pub use output::Formatter;
