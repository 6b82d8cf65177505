//! Customer type.
//!
//! Customers are shared between the caller, the restaurant's seatings and
//! the waitlist. Callers hold them as `Rc<Customer>`; the waitlist only keeps
//! a `Weak<Customer>`, so dropping every strong handle withdraws a waiting
//! customer.

use std::fmt;
use std::rc::Rc;

/// A reservation requester.
///
/// # Examples
///
/// ```
/// use tablekeeper::Customer;
///
/// let customer = Customer::new("Morgan").unwrap();
/// assert_eq!(customer.name(), "Morgan");
///
/// assert!(Customer::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Customer {
    name: String,
}

impl Customer {
    /// Creates a customer with the given display name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError {
                field: "name".into(),
                message: "customer name must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            name: trimmed.to_string(),
        })
    }

    /// Creates a customer wrapped in a shared handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::rc::Rc;
    /// use tablekeeper::Customer;
    ///
    /// let handle = Customer::shared("Lottie").unwrap();
    /// assert_eq!(Rc::strong_count(&handle), 1);
    /// ```
    pub fn shared(name: impl Into<String>) -> Result<Rc<Self>, ValidationError> {
        Self::new(name).map(Rc::new)
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Validation error for customer construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
