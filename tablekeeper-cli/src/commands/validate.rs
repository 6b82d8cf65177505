//! Command to validate a scenario file.

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::utils::{print_json, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use tablekeeper::Scenario;

/// Validate a scenario file without running it.
#[derive(Args)]
pub struct ValidateCommand {
    /// Scenario file to validate
    #[arg(value_name = "FILE")]
    pub scenario_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.scenario_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.scenario_path.display()
            )));
        }

        let scenario = match Scenario::load(&self.scenario_path) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Validation error: {e}");
                return Err(CliError::SemanticFailure(
                    "Scenario file is invalid".to_string(),
                ));
            }
        };

        match global.format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "valid": true,
                "tables": scenario.tables,
                "steps": scenario.steps.len(),
            })),
            OutputFormat::Human => {
                if !global.quiet {
                    println!("Scenario is valid ({} steps)", scenario.steps.len());
                }
                Ok(())
            }
        }
    }
}
