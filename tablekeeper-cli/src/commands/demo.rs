//! Demo command implementation.
//!
//! Runs the built-in scenario: two tables, four customers, one release
//! and a final waitlist listing.

use crate::error::CliError;
use crate::utils::{run_scenario, GlobalOptions};
use clap::Args;
use tablekeeper::{Config, Scenario};

/// Run the built-in demonstration scenario.
#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    /// Execute the demo command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        run_scenario(&Scenario::demo(), global, Config::default())
    }
}
