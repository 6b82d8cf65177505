//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `demo`: Run the built-in demonstration scenario
//! - `run`: Run a scenario file
//! - `validate`: Validate a scenario file

pub mod demo;
pub mod run;
pub mod validate;

pub use demo::DemoCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;
