//! Configuration system for tablekeeper.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`TABLEKEEPER_*`)
//! 3. Explicit file (via `ConfigBuilder::with_file`)
//! 4. User config (`~/.tablekeeper/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use tablekeeper::config::{Config, ConfigBuilder};
//! use tablekeeper::{Restaurant, RestaurantOptions};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config { tables: Some(3), ..Default::default() })
//!     .build()
//!     .unwrap();
//!
//! let options = RestaurantOptions::from(&config);
//! assert_eq!(options.tables, 3);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
