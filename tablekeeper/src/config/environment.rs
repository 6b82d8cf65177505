//! Environment variable handling for configuration overrides.
//!
//! `TABLEKEEPER_*` variables override values loaded from files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Overrides the table count.
pub const TABLES_ENV: &str = "TABLEKEEPER_TABLES";
/// Overrides the waitlist policy.
pub const WAITLIST_POLICY_ENV: &str = "TABLEKEEPER_WAITLIST_POLICY";
/// Overrides the unknown-table policy.
pub const UNKNOWN_TABLE_ENV: &str = "TABLEKEEPER_UNKNOWN_TABLE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tablekeeper::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(tables) = env::var(TABLES_ENV) {
            config.tables = Some(tables.trim().parse().map_err(|_| Error::Validation {
                field: TABLES_ENV.into(),
                message: "Must be a non-negative integer".into(),
            })?);
        }

        if let Ok(policy) = env::var(WAITLIST_POLICY_ENV) {
            config.waitlist_policy =
                Some(policy.parse().map_err(|message| Error::Validation {
                    field: WAITLIST_POLICY_ENV.into(),
                    message,
                })?);
        }

        if let Ok(policy) = env::var(UNKNOWN_TABLE_ENV) {
            config.unknown_table = Some(policy.parse().map_err(|message| Error::Validation {
                field: UNKNOWN_TABLE_ENV.into(),
                message,
            })?);
        }

        Ok(())
    }
}
