//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::restaurant::{UnknownTablePolicy, WaitlistPolicy};

/// Restaurant configuration.
///
/// Every field is optional so that partial files can be layered; unset
/// fields fall back to the defaults when a restaurant is built.
///
/// # Examples
///
/// ```
/// use tablekeeper::config::Config;
/// use tablekeeper::WaitlistPolicy;
///
/// let config: Config = serde_yaml::from_str("tables: 6\nwaitlist_policy: head-only\n").unwrap();
/// assert_eq!(config.tables, Some(6));
/// assert_eq!(config.waitlist_policy, Some(WaitlistPolicy::HeadOnly));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Number of tables.
    pub tables: Option<u32>,

    /// How the waitlist is scanned when a table is released.
    pub waitlist_policy: Option<WaitlistPolicy>,

    /// What releasing a nonexistent table does.
    pub unknown_table: Option<UnknownTablePolicy>,
}

impl Config {
    /// Table count used when none is configured.
    pub const DEFAULT_TABLES: u32 = 4;

    /// Upper bound accepted by validation.
    pub const MAX_TABLES: u32 = 1000;
}
