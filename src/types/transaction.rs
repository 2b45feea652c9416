//! Transaction-related types for the Trader Ledger
//!
//! This module defines the immutable transaction record and the integer
//! field types used by store queries.

use super::trader::TraderRef;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// Calendar year of a transaction
pub type Year = i32;

/// Transaction value
///
/// Sums of values are accumulated as `i64`.
pub type Value = i32;

/// A single trade made by one trader
///
/// Immutable once created. The trader is held by handle, so several transactions
/// can point at the same trader and see its relocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Year the trade took place
    year: Year,

    /// Trade value
    value: Value,

    /// The trader who made the trade
    trader: TraderRef,
}

impl Transaction {
    /// Create a transaction for `trader`
    ///
    /// The handle is cloned, not the trader.
    pub fn new(year: Year, value: Value, trader: &TraderRef) -> Self {
        Transaction {
            year,
            value,
            trader: Rc::clone(trader),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn value(&self) -> Value {
        self.value
    }

    pub fn trader(&self) -> &TraderRef {
        &self.trader
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.year, self.trader, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Trader;

    #[test]
    fn test_shares_trader_handle() {
        let alice = Rc::new(Trader::new("Alice", "London"));
        let tx = Transaction::new(2015, 100, &alice);

        assert!(Rc::ptr_eq(tx.trader(), &alice));
        assert_eq!(Rc::strong_count(&alice), 2);
    }

    #[test]
    fn test_equality_uses_trader_identity() {
        let alice = Rc::new(Trader::new("Alice", "London"));
        let namesake = Rc::new(Trader::new("Alice", "London"));

        assert_eq!(
            Transaction::new(2015, 100, &alice),
            Transaction::new(2015, 100, &alice)
        );
        assert_ne!(
            Transaction::new(2015, 100, &alice),
            Transaction::new(2015, 100, &namesake)
        );
    }

    #[test]
    fn test_display_reflects_current_city() {
        let alice = Rc::new(Trader::new("Alice", "London"));
        let tx = Transaction::new(2015, 100, &alice);
        assert_eq!(tx.to_string(), "2015 Alice (London): 100");

        alice.relocate("Paris");
        assert_eq!(tx.to_string(), "2015 Alice (Paris): 100");
    }

    #[test]
    fn test_serialize_nests_trader() {
        let bob = Rc::new(Trader::new("Bob", "Paris"));
        let tx = Transaction::new(2016, 50, &bob);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "year": 2016,
                "value": 50,
                "trader": { "name": "Bob", "city": "Paris" }
            })
        );
    }
}
