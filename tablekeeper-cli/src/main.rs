//! Main entry point for the tablekeeper CLI.
//!
//! This is the command-line interface for the tablekeeper reservation
//! library. It replays reservation scenarios against a restaurant:
//! - `demo`: Run the built-in two-table demonstration
//! - `run`: Run a scenario file
//! - `validate`: Check a scenario file without running it

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        tables: cli.tables,
        format: cli.format,
    };

    // Route library tracing through the stderr logger
    init_logging(&global);

    let result = match cli.command {
        cli::Command::Demo(cmd) => cmd.execute(&global),
        cli::Command::Run(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(global: &GlobalOptions) {
    let logger = tablekeeper::init_logger(global.verbose, global.quiet);
    if !logger.install() {
        logger.warn("a log backend is already installed");
    }
}
