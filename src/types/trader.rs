//! Trader records for the Trader Ledger
//!
//! A trader is an identity-bearing entity: it is created once by the caller and
//! then shared (never copied) by every transaction it takes part in.

use serde::Serialize;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a trader
///
/// Transactions hold clones of this handle, so all of them observe the same city.
pub type TraderRef = Rc<Trader>;

/// A trader with a fixed name and a mutable home city
///
/// Equality is by identity: two traders are equal only when they are
/// the same record, even if their names and cities match.
#[derive(Debug, Serialize)]
pub struct Trader {
    /// Trader name, used for ordering
    name: String,

    /// Current city
    ///
    /// Changed in place by relocation through any shared handle.
    city: RefCell<String>,
}

impl Trader {
    /// Create a new trader
    ///
    /// Wrap the result in an [`Rc`] (see [`TraderRef`]) to share it between transactions.
    pub fn new(name: impl Into<String>, city: impl Into<String>) -> Self {
        Trader {
            name: name.into(),
            city: RefCell::new(city.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The trader's city at the time of the call
    pub fn city(&self) -> String {
        self.city.borrow().clone()
    }

    /// Whether the trader currently lives in `city` (exact, case-sensitive match)
    pub fn is_in(&self, city: &str) -> bool {
        *self.city.borrow() == city
    }

    /// Move the trader to another city
    ///
    /// Visible through every handle to this trader.
    pub fn relocate(&self, to: &str) {
        let mut city = self.city.borrow_mut();
        city.clear();
        city.push_str(to);
    }
}

impl PartialEq for Trader {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for Trader {}

impl fmt::Display for Trader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.city.borrow())
    }
}
