//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{DemoCommand, RunCommand, ValidateCommand};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line tool for replaying restaurant reservation scenarios.
#[derive(Parser)]
#[command(name = "tablekeeper")]
#[command(version, about = "Replay restaurant table reservation scenarios", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file on top of the user config
    #[arg(long, value_name = "PATH", global = true, env = "TABLEKEEPER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of tables, used when the scenario does not set one
    #[arg(long, value_name = "N", global = true, env = "TABLEKEEPER_TABLES")]
    pub tables: Option<u32>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per notice
    Human,
    /// Final restaurant state as JSON
    Json,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in demonstration scenario
    Demo(DemoCommand),

    /// Run a scenario file
    Run(RunCommand),

    /// Validate a scenario file without running it
    Validate(ValidateCommand),
}
