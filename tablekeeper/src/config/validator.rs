//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `tables` exceeds [`Config::MAX_TABLES`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeeper::config::{Config, ConfigValidator};
    ///
    /// let config = Config { tables: Some(5000), ..Default::default() };
    /// assert!(ConfigValidator::validate(&config).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(tables) = config.tables {
            if tables > Config::MAX_TABLES {
                return Err(Error::Validation {
                    field: "tables".into(),
                    message: format!(
                        "{tables} tables exceeds the maximum of {}",
                        Config::MAX_TABLES
                    ),
                });
            }
        }

        Ok(())
    }
}
