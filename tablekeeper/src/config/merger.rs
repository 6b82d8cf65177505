//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tablekeeper::config::{Config, ConfigMerger};
///
/// let low = Config { tables: Some(2), ..Default::default() };
/// let high = Config { tables: Some(8), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.tables, Some(8));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge `source` into `target`; fields set in `source` win.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.tables.is_some() {
            target.tables = source.tables;
        }

        if source.waitlist_policy.is_some() {
            target.waitlist_policy = source.waitlist_policy;
        }

        if source.unknown_table.is_some() {
            target.unknown_table = source.unknown_table;
        }
    }
}
