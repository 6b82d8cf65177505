//! Scripted caller actions replayed against a restaurant.
//!
//! A [`Scenario`] plays the part of the code that owns customers: it creates
//! them, asks for tables, releases tables and eventually lets go of its
//! handles. Dropping a handle with a `leave` step is how a waiting customer
//! withdraws, since the waitlist itself does not keep anybody alive.
//!
//! # Format
//!
//! ```yaml
//! tables: 2
//! steps:
//!   - reserve: Morgan
//!   - release: 1
//!   - leave: Morgan
//!   - print-waitlist
//!   - purge-stale
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::reporter::{Notice, Reporter};
use crate::{Customer, Restaurant, RestaurantOptions};

/// One caller action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Ask for a table on behalf of the named customer, creating them on
    /// first use.
    Reserve(String),
    /// Release a table by number.
    Release(u32),
    /// Drop the caller's handle to the named customer.
    Leave(String),
    /// List everyone still waiting.
    PrintWaitlist,
    /// Drop withdrawn waitlist entries.
    PurgeStale,
}

/// A sequence of steps with an optional table count.
///
/// # Examples
///
/// ```
/// use tablekeeper::Scenario;
///
/// let scenario = Scenario::from_yaml("tables: 1\nsteps:\n  - reserve: Morgan\n  - print-waitlist\n").unwrap();
/// assert_eq!(scenario.tables, Some(1));
/// assert_eq!(scenario.steps.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Table count; overrides the configured value when set.
    #[serde(default)]
    pub tables: Option<u32>,

    /// Steps in execution order.
    pub steps: Vec<Step>,
}

impl Scenario {
    /// The built-in demonstration: two tables, four customers, one release.
    ///
    /// Morgan and Lottie are seated, Nathan and Dai wait, releasing table 1
    /// seats Nathan and the final listing shows only Dai.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            tables: Some(2),
            steps: vec![
                Step::Reserve("Morgan".into()),
                Step::Reserve("Lottie".into()),
                Step::Reserve("Nathan".into()),
                Step::Reserve("Dai".into()),
                Step::Release(1),
                Step::PrintWaitlist,
            ],
        }
    }

    /// Parses a scenario from YAML and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the scenario is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let scenario: Self = serde_yaml::from_str(contents)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Reads and validates a scenario file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read scenario file: {e}"),
        })?;
        Self::from_yaml(&contents)
    }

    /// Checks the scenario without running it.
    ///
    /// Customer names must be non-empty, `leave` must name a customer the
    /// scenario currently holds, and the table count must be within
    /// [`Config::MAX_TABLES`].
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending step.
    pub fn validate(&self) -> Result<()> {
        if let Some(tables) = self.tables {
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

        let mut held: HashSet<String> = HashSet::new();
        for (index, step) in self.steps.iter().enumerate() {
            let field = format!("steps[{index}]");
            match step {
                Step::Reserve(name) => {
                    let customer = Customer::new(name.as_str()).map_err(|e| Error::Validation {
                        field: field.clone(),
                        message: e.message,
                    })?;
                    held.insert(customer.name().to_string());
                }
                Step::Leave(name) => {
                    if !held.remove(name.trim()) {
                        return Err(Error::Validation {
                            field,
                            message: format!("'{name}' is not held by the scenario"),
                        });
                    }
                }
                Step::Release(_) | Step::PrintWaitlist | Step::PurgeStale => {}
            }
        }

        Ok(())
    }

    /// Restaurant options for this scenario, starting from `base`.
    #[must_use]
    pub fn options(&self, base: RestaurantOptions) -> RestaurantOptions {
        RestaurantOptions {
            tables: self.tables.unwrap_or(base.tables),
            ..base
        }
    }
}

/// Replays scenario steps while holding the caller-side customer handles.
///
/// # Examples
///
/// ```
/// use tablekeeper::{Notice, Restaurant, Scenario, ScenarioRunner};
///
/// let scenario = Scenario::demo();
/// let restaurant = Restaurant::with_reporter(2, Vec::<Notice>::new());
/// let mut runner = ScenarioRunner::new(restaurant);
/// runner.run(&scenario).unwrap();
///
/// assert_eq!(runner.restaurant().snapshot().waitlist, vec!["Dai".to_string()]);
/// ```
#[derive(Debug)]
pub struct ScenarioRunner<R: Reporter> {
    restaurant: Restaurant<R>,
    handles: HashMap<String, Rc<Customer>>,
}

impl<R: Reporter> ScenarioRunner<R> {
    /// Wraps a restaurant with no customers held yet.
    #[must_use]
    pub fn new(restaurant: Restaurant<R>) -> Self {
        Self {
            restaurant,
            handles: HashMap::new(),
        }
    }

    /// Validates and runs every step of `scenario`.
    ///
    /// The scenario's table count is not applied here; build the restaurant
    /// with [`Scenario::options`].
    ///
    /// # Errors
    ///
    /// Returns the validation error, or the first step that fails.
    pub fn run(&mut self, scenario: &Scenario) -> Result<()> {
        scenario.validate()?;
        for step in &scenario.steps {
            self.apply(step)?;
        }
        Ok(())
    }

    /// Runs a single step.
    ///
    /// # Errors
    ///
    /// Fails on an invalid customer name, on `leave` for a customer that is
    /// not held, and on releases the restaurant rejects.
    pub fn apply(&mut self, step: &Step) -> Result<()> {
        match step {
            Step::Reserve(name) => {
                let customer = self.handle_for(name)?;
                let seated = self.restaurant.reserve_table(&customer);
                self.restaurant
                    .reporter_mut()
                    .report(Notice::ReservationResult {
                        customer: customer.name().to_string(),
                        seated,
                    });
            }
            Step::Release(number) => {
                let outcome = self.restaurant.release_table(*number)?;
                log::debug!("release {number}: {outcome:?}");
            }
            Step::Leave(name) => {
                if self.handles.remove(name.trim()).is_none() {
                    return Err(Error::Validation {
                        field: "leave".into(),
                        message: format!("'{name}' is not held by the scenario"),
                    });
                }
            }
            Step::PrintWaitlist => self.restaurant.print_waitlist(),
            Step::PurgeStale => {
                self.restaurant.purge_stale();
            }
        }
        Ok(())
    }

    /// The restaurant being driven.
    #[must_use]
    pub const fn restaurant(&self) -> &Restaurant<R> {
        &self.restaurant
    }

    /// The handle held for `name`, if any.
    #[must_use]
    pub fn handle(&self, name: &str) -> Option<&Rc<Customer>> {
        self.handles.get(name)
    }

    /// Releases every held handle and returns the restaurant.
    pub fn into_restaurant(self) -> Restaurant<R> {
        self.restaurant
    }

    fn handle_for(&mut self, name: &str) -> Result<Rc<Customer>> {
        let customer = Customer::new(name)?;
        let handle = self
            .handles
            .entry(customer.name().to_string())
            .or_insert_with(|| Rc::new(customer));
        Ok(Rc::clone(handle))
    }
}
