//! Table allocation and waitlist management.
//!
//! A [`Restaurant`] owns a fixed set of tables numbered `1..=N`. Requests are
//! served lowest-numbered table first; when nothing is free the customer
//! joins a first-in-first-out waitlist. Releasing a reserved table
//! immediately offers it to the longest-waiting customer who is still
//! interested.
//!
//! # Ownership
//!
//! Customers are passed around as `Rc<Customer>`. A seated customer is kept
//! alive by the restaurant until their table is released. A waiting customer
//! is only referenced weakly: once the caller drops every strong handle the
//! entry is inert and is skipped when the waitlist is listed or notified.
//!
//! # Examples
//!
//! ```
//! use tablekeeper::{Customer, Notice, Restaurant};
//!
//! let mut restaurant = Restaurant::with_reporter(1, Vec::<Notice>::new());
//! let morgan = Customer::shared("Morgan").unwrap();
//! let nathan = Customer::shared("Nathan").unwrap();
//!
//! assert!(restaurant.reserve_table(&morgan));
//! assert!(!restaurant.reserve_table(&nathan));
//!
//! restaurant.release_table(1).unwrap();
//! assert_eq!(restaurant.seated_at(1).unwrap().name(), "Nathan");
//! assert!(restaurant
//!     .reporter()
//!     .contains(&Notice::Waitlisted { customer: "Nathan".into() }));
//! ```

use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::reporter::{LogReporter, Notice, Reporter};
use crate::{Customer, Table, TableNumber};

mod policy;
mod snapshot;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use policy::{UnknownTablePolicy, WaitlistPolicy};
pub use snapshot::{RestaurantSnapshot, TableSnapshot};

/// Construction parameters for a [`Restaurant`].
///
/// # Examples
///
/// ```
/// use tablekeeper::{RestaurantOptions, UnknownTablePolicy, WaitlistPolicy};
///
/// let options = RestaurantOptions::new(3)
///     .with_waitlist_policy(WaitlistPolicy::HeadOnly)
///     .with_unknown_table(UnknownTablePolicy::Error);
/// assert_eq!(options.tables, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestaurantOptions {
    /// Number of tables, numbered `1..=tables`.
    pub tables: u32,

    /// How the waitlist is scanned on release.
    pub waitlist_policy: WaitlistPolicy,

    /// What releasing a nonexistent table does.
    pub unknown_table: UnknownTablePolicy,
}

impl RestaurantOptions {
    /// Creates options for `tables` tables with default policies.
    #[must_use]
    pub const fn new(tables: u32) -> Self {
        Self {
            tables,
            waitlist_policy: WaitlistPolicy::SkipStale,
            unknown_table: UnknownTablePolicy::Ignore,
        }
    }

    /// Sets the waitlist policy.
    #[must_use]
    pub const fn with_waitlist_policy(mut self, policy: WaitlistPolicy) -> Self {
        self.waitlist_policy = policy;
        self
    }

    /// Sets the unknown-table policy.
    #[must_use]
    pub const fn with_unknown_table(mut self, policy: UnknownTablePolicy) -> Self {
        self.unknown_table = policy;
        self
    }
}

impl From<&Config> for RestaurantOptions {
    fn from(config: &Config) -> Self {
        Self::new(config.tables.unwrap_or(Config::DEFAULT_TABLES))
            .with_waitlist_policy(config.waitlist_policy.unwrap_or_default())
            .with_unknown_table(config.unknown_table.unwrap_or_default())
    }
}

/// A customer occupying a table.
#[derive(Debug, Clone)]
pub struct Seating {
    table: TableNumber,
    customer: Rc<Customer>,
}

impl Seating {
    /// The occupied table.
    #[must_use]
    pub const fn table(&self) -> TableNumber {
        self.table
    }

    /// The seated customer.
    #[must_use]
    pub fn customer(&self) -> &Rc<Customer> {
        &self.customer
    }
}

/// What a call to [`Restaurant::release_table`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The table was freed.
    Released {
        /// The freed table.
        table: TableNumber,
        /// The waiting customer who was seated there in turn, if any.
        promoted: Option<Rc<Customer>>,
    },
    /// The table was not reserved; nothing changed.
    AlreadyFree(TableNumber),
    /// No table has this number; nothing changed.
    Unknown(u32),
}

/// Fixed pool of tables with seatings and a waitlist.
///
/// The reporter type defaults to [`LogReporter`]; tests usually pass a
/// `Vec<Notice>` to inspect the notices afterwards.
#[derive(Debug)]
pub struct Restaurant<R: Reporter = LogReporter> {
    tables: Vec<Table>,
    seatings: Vec<Seating>,
    waitlist: VecDeque<Weak<Customer>>,
    waitlist_policy: WaitlistPolicy,
    unknown_table: UnknownTablePolicy,
    reporter: R,
}

impl Restaurant<LogReporter> {
    /// Creates a restaurant with `table_count` tables, reporting through the
    /// `log` facade.
    ///
    /// # Examples
    ///
    /// ```
    /// use tablekeeper::Restaurant;
    ///
    /// let restaurant = Restaurant::new(2);
    /// assert_eq!(restaurant.table_count(), 2);
    /// assert_eq!(restaurant.available_count(), 2);
    /// ```
    #[must_use]
    pub fn new(table_count: u32) -> Self {
        Self::with_reporter(table_count, LogReporter)
    }
}

impl<R: Reporter> Restaurant<R> {
    /// Creates a restaurant with `table_count` tables and default policies.
    #[must_use]
    pub fn with_reporter(table_count: u32, reporter: R) -> Self {
        Self::with_options(RestaurantOptions::new(table_count), reporter)
    }

    /// Creates a restaurant from explicit options.
    #[must_use]
    pub fn with_options(options: RestaurantOptions, reporter: R) -> Self {
        Self {
            tables: TableNumber::sequence(options.tables).map(Table::new).collect(),
            seatings: Vec::new(),
            waitlist: VecDeque::new(),
            waitlist_policy: options.waitlist_policy,
            unknown_table: options.unknown_table,
            reporter,
        }
    }

    /// Creates a restaurant from a resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config, reporter: R) -> Self {
        Self::with_options(RestaurantOptions::from(config), reporter)
    }

    /// Requests a table for `customer`.
    ///
    /// Seats the customer at the lowest-numbered free table and returns
    /// `true`. When every table is taken the customer is appended to the
    /// waitlist and `false` is returned.
    ///
    /// A customer who is already seated keeps their table and gets `true`
    /// with no state change. One who is already waiting keeps their place
    /// and gets `false` while every table is taken; if a table is free they
    /// leave the waitlist and are seated.
    pub fn reserve_table(&mut self, customer: &Rc<Customer>) -> bool {
        if self.is_seated(customer) {
            log::debug!("{} already has a table", customer.name());
            return true;
        }
        if self.is_waiting(customer) {
            if self.available_count() == 0 {
                log::debug!("{} is already on the waitlist", customer.name());
                return false;
            }
            let handle = Rc::downgrade(customer);
            self.waitlist.retain(|entry| !entry.ptr_eq(&handle));
        }

        if self.try_seat(customer).is_some() {
            return true;
        }

        self.waitlist.push_back(Rc::downgrade(customer));
        self.reporter.report(Notice::Waitlisted {
            customer: customer.name().to_string(),
        });
        false
    }

    /// Frees the table numbered `table_number`.
    ///
    /// Freeing a reserved table ends its seating and then offers the table to
    /// the waitlist. Releasing a free table changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TableNotFound`] if no table has this number and the
    /// restaurant uses [`UnknownTablePolicy::Error`]. Under the default
    /// [`UnknownTablePolicy::Ignore`] the result is
    /// [`ReleaseOutcome::Unknown`] instead.
    pub fn release_table(&mut self, table_number: u32) -> Result<ReleaseOutcome> {
        let Some(table) = self
            .tables
            .iter_mut()
            .find(|t| t.number().value() == table_number)
        else {
            return match self.unknown_table {
                UnknownTablePolicy::Ignore => {
                    log::debug!("ignoring release of unknown table {table_number}");
                    Ok(ReleaseOutcome::Unknown(table_number))
                }
                UnknownTablePolicy::Error => Err(Error::TableNotFound {
                    number: table_number,
                }),
            };
        };

        let number = table.number();
        if table.is_available() {
            self.reporter
                .report(Notice::TableAlreadyFree { table: number });
            return Ok(ReleaseOutcome::AlreadyFree(number));
        }

        table.release();
        self.seatings.retain(|seating| seating.table != number);
        self.reporter.report(Notice::TableReleased { table: number });

        let promoted = self.notify_waitlist();
        Ok(ReleaseOutcome::Released {
            table: number,
            promoted,
        })
    }

    /// Reports the names of everyone still waiting, oldest first.
    ///
    /// Emits a [`Notice::WaitlistHeader`] followed by one
    /// [`Notice::WaitlistEntry`] per live customer. Withdrawn customers are
    /// skipped silently.
    pub fn print_waitlist(&mut self) {
        self.reporter.report(Notice::WaitlistHeader);
        for customer in self.waitlist.iter().filter_map(Weak::upgrade) {
            self.reporter.report(Notice::WaitlistEntry {
                customer: customer.name().to_string(),
            });
        }
    }

    /// Drops waitlist entries whose customer has been withdrawn.
    ///
    /// Returns the number of entries removed.
    pub fn purge_stale(&mut self) -> usize {
        let before = self.waitlist.len();
        self.waitlist.retain(|entry| entry.strong_count() > 0);
        let removed = before - self.waitlist.len();
        if removed > 0 {
            log::debug!("purged {removed} withdrawn waitlist entries");
        }
        removed
    }

    /// All tables in ascending number order.
    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Looks up a table by number.
    #[must_use]
    pub fn table(&self, number: u32) -> Option<&Table> {
        self.tables.iter().find(|t| t.number().value() == number)
    }

    /// Total number of tables.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Number of free tables.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.tables.iter().filter(|t| t.is_available()).count()
    }

    /// Current seatings in the order they were made.
    #[must_use]
    pub fn seatings(&self) -> &[Seating] {
        &self.seatings
    }

    /// Customers currently occupying a table.
    pub fn active_customers(&self) -> impl Iterator<Item = &Rc<Customer>> + '_ {
        self.seatings.iter().map(Seating::customer)
    }

    /// The customer seated at table `number`, if any.
    #[must_use]
    pub fn seated_at(&self, number: u32) -> Option<&Rc<Customer>> {
        self.seatings
            .iter()
            .find(|s| s.table.value() == number)
            .map(Seating::customer)
    }

    /// Returns `true` if `customer` occupies a table.
    #[must_use]
    pub fn is_seated(&self, customer: &Rc<Customer>) -> bool {
        self.seatings
            .iter()
            .any(|s| Rc::ptr_eq(&s.customer, customer))
    }

    /// Returns `true` if `customer` has a live waitlist entry.
    #[must_use]
    pub fn is_waiting(&self, customer: &Rc<Customer>) -> bool {
        self.waitlist
            .iter()
            .filter_map(Weak::upgrade)
            .any(|waiting| Rc::ptr_eq(&waiting, customer))
    }

    /// Number of waitlist entries, including withdrawn ones not yet dropped.
    #[must_use]
    pub fn waitlist_len(&self) -> usize {
        self.waitlist.len()
    }

    /// Customers still waiting, oldest first.
    #[must_use]
    pub fn waiting_customers(&self) -> Vec<Rc<Customer>> {
        self.waitlist.iter().filter_map(Weak::upgrade).collect()
    }

    /// The configured waitlist policy.
    #[must_use]
    pub const fn waitlist_policy(&self) -> WaitlistPolicy {
        self.waitlist_policy
    }

    /// The configured unknown-table policy.
    #[must_use]
    pub const fn unknown_table_policy(&self) -> UnknownTablePolicy {
        self.unknown_table
    }

    /// The reporter receiving this restaurant's notices.
    #[must_use]
    pub const fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Mutable access to the reporter.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consumes the restaurant and returns its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Captures the current state.
    #[must_use]
    pub fn snapshot(&self) -> RestaurantSnapshot {
        let tables = self
            .tables
            .iter()
            .map(|table| TableSnapshot {
                number: table.number(),
                available: table.is_available(),
                seated: self
                    .seated_at(table.number().value())
                    .map(|c| c.name().to_string()),
            })
            .collect();
        let waitlist: Vec<String> = self
            .waiting_customers()
            .iter()
            .map(|c| c.name().to_string())
            .collect();
        let stale_entries = self.waitlist.len() - waitlist.len();

        RestaurantSnapshot {
            tables,
            waitlist,
            stale_entries,
        }
    }

    /// Seats `customer` at the lowest-numbered free table.
    fn try_seat(&mut self, customer: &Rc<Customer>) -> Option<TableNumber> {
        let table = self.tables.iter_mut().find(|t| t.is_available())?;
        table.reserve();
        let number = table.number();

        self.seatings.push(Seating {
            table: number,
            customer: Rc::clone(customer),
        });
        self.reporter.report(Notice::TableReserved {
            table: number,
            customer: customer.name().to_string(),
        });
        Some(number)
    }

    /// Offers a free table to the waitlist.
    ///
    /// The head entry is taken off the queue before it is offered a table,
    /// so a customer can never end up queued twice. If no table turns out
    /// to be free the customer goes back to the head.
    fn notify_waitlist(&mut self) -> Option<Rc<Customer>> {
        while let Some(entry) = self.waitlist.pop_front() {
            let Some(customer) = entry.upgrade() else {
                log::debug!("dropping withdrawn waitlist entry");
                match self.waitlist_policy {
                    WaitlistPolicy::SkipStale => continue,
                    WaitlistPolicy::HeadOnly => return None,
                }
            };

            if self.try_seat(&customer).is_some() {
                return Some(customer);
            }

            self.waitlist.push_front(entry);
            return None;
        }
        None
    }
}
