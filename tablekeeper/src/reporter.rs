//! Human-readable notices and the reporters that receive them.
//!
//! Every restaurant operation describes its outcome as a [`Notice`]. Where
//! the notices end up is decided by the [`Reporter`] handed to the
//! restaurant: stdout for the CLI, a `Vec<Notice>` in tests, the `log`
//! facade by default.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::TableNumber;

/// A user-facing message produced by a restaurant or scenario operation.
///
/// The `Display` form is the text shown to people; tests match on the
/// variants instead.
///
/// # Examples
///
/// ```
/// use tablekeeper::{Notice, TableNumber};
///
/// let notice = Notice::TableReserved {
///     table: TableNumber::try_from(1).unwrap(),
///     customer: "Morgan".to_string(),
/// };
/// assert_eq!(notice.to_string(), "Reserved table 1 for Morgan .");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Notice {
    /// A customer was seated at a table.
    TableReserved {
        /// The table that was reserved.
        table: TableNumber,
        /// The seated customer's name.
        customer: String,
    },
    /// No table was free and the customer joined the waitlist.
    Waitlisted {
        /// The waiting customer's name.
        customer: String,
    },
    /// A reserved table was freed.
    TableReleased {
        /// The freed table.
        table: TableNumber,
    },
    /// A release targeted a table that was not reserved.
    TableAlreadyFree {
        /// The table in question.
        table: TableNumber,
    },
    /// Opens a waitlist listing.
    WaitlistHeader,
    /// One live customer in a waitlist listing.
    WaitlistEntry {
        /// The waiting customer's name.
        customer: String,
    },
    /// Summary line written by a scenario after each reservation request.
    ReservationResult {
        /// The requesting customer's name.
        customer: String,
        /// Whether the customer was seated immediately.
        seated: bool,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TableReserved { table, customer } => {
                write!(f, "Reserved table {table} for {customer} .")
            }
            Self::Waitlisted { customer } => {
                write!(f, "No tables free. Added {customer} to the waitlist.")
            }
            Self::TableReleased { table } => write!(f, "Released table {table}."),
            Self::TableAlreadyFree { table } => write!(f, "Table {table} was already free."),
            Self::WaitlistHeader => write!(f, "The following people are waiting for a table: "),
            Self::WaitlistEntry { customer } => write!(f, "{customer}"),
            Self::ReservationResult { customer, seated } => {
                let outcome = if *seated {
                    "Success!"
                } else {
                    "Added to waitlist!"
                };
                write!(f, "Reserving table for {customer}: {outcome}")
            }
        }
    }
}

/// Receives the notices produced by restaurant operations.
pub trait Reporter {
    /// Handle one notice.
    fn report(&mut self, notice: Notice);
}

impl Reporter for Vec<Notice> {
    fn report(&mut self, notice: Notice) {
        self.push(notice);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, notice: Notice) {
        (**self).report(notice);
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, notice: Notice) {
        (**self).report(notice);
    }
}

/// Discards every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&mut self, _notice: Notice) {}
}

/// Forwards notices to the `log` facade at info level.
///
/// This is the default reporter of [`crate::Restaurant::new`]; nothing is
/// printed unless a `log` backend is installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, notice: Notice) {
        log::info!(target: "tablekeeper::notice", "{notice}");
    }
}

/// Writes one line per notice to an [`io::Write`] sink.
///
/// Write failures do not interrupt the restaurant; the first one is kept
/// and returned by [`WriterReporter::finish`].
///
/// # Examples
///
/// ```
/// use tablekeeper::{Notice, Reporter, WriterReporter};
///
/// let mut reporter = WriterReporter::new(Vec::new());
/// reporter.report(Notice::WaitlistHeader);
/// let bytes = reporter.finish().unwrap();
/// assert_eq!(
///     String::from_utf8(bytes).unwrap(),
///     "The following people are waiting for a table: \n"
/// );
/// ```
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriterReporter<W> {
    /// Creates a reporter writing to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the sink and returns it, or the first write error.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error raised while reporting or flushing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl WriterReporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn report(&mut self, notice: Notice) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{notice}") {
            self.error = Some(err);
        }
    }
}
