#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # tablekeeper
//!
//! A library for managing restaurant table reservations and waitlists.
//!
//! A restaurant has a fixed number of tables. Customers ask for a table and
//! are either seated at the lowest-numbered free one or put on a
//! first-in-first-out waitlist. When a table is released the longest-waiting
//! customer who is still interested is seated there.
//!
//! ## Core Types
//!
//! - [`Table`] and [`TableNumber`]: Reservable capacity
//! - [`Customer`]: Reservation requester, shared as `Rc<Customer>`
//! - [`Restaurant`]: Allocation, release and waitlist notification
//! - [`Notice`] and [`Reporter`]: Human-readable outcome messages
//! - [`Scenario`] and [`ScenarioRunner`]: Scripted caller actions
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use tablekeeper::{Customer, Notice, Restaurant};
//!
//! let mut restaurant = Restaurant::with_reporter(2, Vec::<Notice>::new());
//! let morgan = Customer::shared("Morgan").unwrap();
//! let lottie = Customer::shared("Lottie").unwrap();
//! let nathan = Customer::shared("Nathan").unwrap();
//!
//! assert!(restaurant.reserve_table(&morgan));
//! assert!(restaurant.reserve_table(&lottie));
//! assert!(!restaurant.reserve_table(&nathan));
//!
//! restaurant.release_table(1).unwrap();
//! assert_eq!(restaurant.seated_at(1).unwrap().name(), "Nathan");
//! ```

pub mod config;
pub mod customer;
pub mod error;
pub mod logging;
pub mod reporter;
pub mod restaurant;
pub mod scenario;
pub mod table;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use customer::Customer;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reporter::{LogReporter, Notice, NullReporter, Reporter, WriterReporter};
pub use restaurant::{
    ReleaseOutcome, Restaurant, RestaurantOptions, RestaurantSnapshot, Seating, TableSnapshot,
    UnknownTablePolicy, WaitlistPolicy,
};
pub use scenario::{Scenario, ScenarioRunner, Step};
pub use table::{Table, TableNumber};
