//! Run command implementation.
//!
//! This module implements the `run` command, which replays a scenario file
//! against a freshly configured restaurant.

use crate::error::CliError;
use crate::utils::{load_scenario, run_scenario, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tablekeeper::{Config, UnknownTablePolicy, WaitlistPolicy};

/// Run a scenario file.
#[derive(Args)]
pub struct RunCommand {
    /// Scenario file to run
    #[arg(value_name = "FILE")]
    pub scenario_path: PathBuf,

    /// How the waitlist is scanned when a table is released
    #[arg(long, value_enum, value_name = "POLICY")]
    pub waitlist_policy: Option<WaitlistPolicy>,

    /// What releasing a nonexistent table does
    #[arg(long, value_enum, value_name = "POLICY")]
    pub unknown_table: Option<UnknownTablePolicy>,
}

impl RunCommand {
    /// Execute the run command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load and validate the scenario
        let scenario = load_scenario(&self.scenario_path)?;

        // 2. Command flags take precedence over every other source
        let overrides = Config {
            tables: None,
            waitlist_policy: self.waitlist_policy,
            unknown_table: self.unknown_table,
        };

        // 3. Replay
        run_scenario(&scenario, global, overrides)
    }
}
