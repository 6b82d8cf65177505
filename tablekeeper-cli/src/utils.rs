//! Utility functions for CLI operations.
//!
//! This module provides helpers shared by the commands: configuration
//! loading, scenario file resolution, and running a scenario to stdout.

use crate::cli::OutputFormat;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use tablekeeper::{
    Config, ConfigBuilder, NullReporter, Reporter, Restaurant, RestaurantOptions, Scenario,
    ScenarioRunner, WriterReporter,
};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Table count override.
    pub tables: Option<u32>,

    /// Output format.
    pub format: OutputFormat,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The user config in `~/.tablekeeper`
/// 5. Built-in defaults (lowest priority)
///
/// `overrides` carries command-specific settings; `--tables` is folded into
/// it when given.
pub fn load_configuration(
    global: &GlobalOptions,
    mut overrides: Config,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(path) = &global.config {
        builder = builder.with_file(path);
    }

    if global.tables.is_some() {
        overrides.tables = global.tables;
    }

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Read a scenario file, reporting a missing file as an argument error.
pub fn load_scenario(path: &Path) -> Result<Scenario, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "File not found: {}",
            path.display()
        )));
    }
    Ok(Scenario::load(path)?)
}

/// Run `scenario` and print the result in the requested format.
///
/// Human output streams one line per notice to stdout as the scenario
/// runs; JSON output prints the final restaurant snapshot.
pub fn run_scenario(
    scenario: &Scenario,
    global: &GlobalOptions,
    overrides: Config,
) -> Result<(), CliError> {
    let config = load_configuration(global, overrides)?;
    let options = scenario.options(RestaurantOptions::from(&config));

    match global.format {
        OutputFormat::Human => {
            let restaurant = replay(scenario, options, WriterReporter::stdout())?;
            restaurant.into_reporter().finish()?;
        }
        OutputFormat::Json => {
            let restaurant = replay(scenario, options, NullReporter)?;
            print_json(&restaurant.snapshot())?;
        }
    }

    Ok(())
}

/// Print a serializable value as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(tablekeeper::Error::from)?;
    println!("{json}");
    Ok(())
}

fn replay<R: Reporter>(
    scenario: &Scenario,
    options: RestaurantOptions,
    reporter: R,
) -> Result<Restaurant<R>, CliError> {
    let mut runner = ScenarioRunner::new(Restaurant::with_options(options, reporter));
    runner.run(scenario)?;
    Ok(runner.into_restaurant())
}
