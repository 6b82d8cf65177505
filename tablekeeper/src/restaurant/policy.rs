//! Behavior switches for waitlist notification and unknown releases.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the waitlist is scanned when a table becomes free.
///
/// # Examples
///
/// ```
/// use tablekeeper::WaitlistPolicy;
///
/// assert_eq!(WaitlistPolicy::default(), WaitlistPolicy::SkipStale);
/// assert_eq!("head-only".parse::<WaitlistPolicy>().unwrap(), WaitlistPolicy::HeadOnly);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum WaitlistPolicy {
    /// Drop withdrawn customers at the head and keep going until someone
    /// still waiting is found.
    #[default]
    SkipStale,
    /// Only look at the head. A withdrawn head is dropped and nobody else is
    /// offered the table.
    HeadOnly,
}

/// What releasing a table number the restaurant does not have does.
///
/// # Examples
///
/// ```
/// use tablekeeper::UnknownTablePolicy;
///
/// assert_eq!(UnknownTablePolicy::default(), UnknownTablePolicy::Ignore);
/// assert_eq!(UnknownTablePolicy::Error.to_string(), "error");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownTablePolicy {
    /// Complete without changing anything.
    #[default]
    Ignore,
    /// Fail with [`crate::Error::TableNotFound`].
    Error,
}

impl fmt::Display for WaitlistPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SkipStale => write!(f, "skip-stale"),
            Self::HeadOnly => write!(f, "head-only"),
        }
    }
}

impl fmt::Display for UnknownTablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ignore => write!(f, "ignore"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl FromStr for WaitlistPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("invalid waitlist policy: {s} (expected skip-stale or head-only)"))
    }
}

impl FromStr for UnknownTablePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| format!("invalid unknown-table policy: {s} (expected ignore or error)"))
    }
}
