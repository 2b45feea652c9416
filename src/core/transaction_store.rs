//! Transaction storage and queries
//!
//! This module provides the TransactionStore component that keeps every recorded
//! transaction in insertion order and answers queries over that history:
//! filtering by year, grouping, aggregation and trader lookups by city.
//!
//! # Ordering
//!
//! The store only grows, and insertion order is the tie-breaker for every query
//! that sorts: sorts are stable, so equal keys keep the order in which their
//! transactions were added.
//!
//! # Trader Identity
//!
//! Trader queries deduplicate by identity, not by name. Two distinct traders named
//! "Alice" both appear in results; the same trader referenced by many transactions
//! appears once.
//!
//! # Relocation
//!
//! [`TransactionStore::relocate_traders`] is the only mutation besides `add`. It
//! changes the city of shared trader records, so the change is visible to every
//! transaction (and every outside handle) referencing those traders.

use crate::types::{QueryError, Trader, TraderRef, Transaction, Value, Year};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing::{debug, trace};

/// In-memory ordered transaction history
///
/// Not thread-safe; callers that share a store must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct TransactionStore {
    /// Transactions in insertion order
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a new empty transaction store
    pub fn new() -> Self {
        TransactionStore {
            transactions: Vec::new(),
        }
    }

    /// Create an empty store with room for `capacity` transactions
    pub fn with_capacity(capacity: usize) -> Self {
        TransactionStore {
            transactions: Vec::with_capacity(capacity),
        }
    }

    /// Append a transaction to the end of the history
    ///
    /// No validation is performed; duplicates are kept.
    pub fn add(&mut self, transaction: Transaction) {
        trace!(
            year = transaction.year(),
            value = transaction.value(),
            trader = transaction.trader().name(),
            "adding transaction"
        );
        self.transactions.push(transaction);
    }

    /// Number of stored transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Transactions made in `year`, sorted ascending by value
    ///
    /// Transactions with equal values keep their insertion order. A year with no
    /// transactions yields an empty list.
    pub fn transactions_in_year(&self, year: Year) -> Vec<&Transaction> {
        let mut in_year: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|tx| tx.year() == year)
            .collect();
        in_year.sort_by_key(|tx| tx.value());
        in_year
    }

    /// Cities of all referenced traders, each once, in first-encountered order
    pub fn distinct_cities(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.transactions
            .iter()
            .map(|tx| tx.trader().city())
            .filter(|city| seen.insert(city.clone()))
            .collect()
    }

    /// Traders currently living in `city`, each once, sorted ascending by name
    ///
    /// Cities are read at call time, so earlier relocations are reflected.
    pub fn traders_in_city(&self, city: &str) -> Vec<TraderRef> {
        let mut traders: Vec<TraderRef> = self
            .distinct_traders()
            .filter(|trader| trader.is_in(city))
            .cloned()
            .collect();
        traders.sort_by(|a, b| a.name().cmp(b.name()));
        traders
    }

    /// Whether any referenced trader currently lives in `city`
    pub fn has_trader_in_city(&self, city: &str) -> bool {
        !self.traders_in_city(city).is_empty()
    }

    /// Transactions grouped by year
    ///
    /// Within a year, transactions keep their insertion order. The map itself has
    /// no defined key order.
    pub fn transactions_by_year(&self) -> HashMap<Year, Vec<&Transaction>> {
        let mut by_year: HashMap<Year, Vec<&Transaction>> = HashMap::new();
        for tx in &self.transactions {
            by_year.entry(tx.year()).or_default().push(tx);
        }
        by_year
    }

    /// Move every trader currently in `from` to `to`
    ///
    /// The change applies to the shared trader records, so every transaction
    /// referencing a moved trader sees the new city. Moving to the same city
    /// leaves traders unchanged.
    ///
    /// # Returns
    ///
    /// The number of distinct traders that were in `from` (0 when none were)
    pub fn relocate_traders(&self, from: &str, to: &str) -> usize {
        let traders = self.traders_in_city(from);
        for trader in &traders {
            trader.relocate(to);
        }
        debug!(from, to, moved = traders.len(), "relocated traders");
        traders.len()
    }

    /// Highest transaction value
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyCollection`] if the store holds no transactions
    pub fn highest_value(&self) -> Result<Value, QueryError> {
        self.transactions
            .iter()
            .map(Transaction::value)
            .max()
            .ok_or_else(|| empty_store("highest value"))
    }

    /// Sum of all transaction values
    ///
    /// An empty store totals zero.
    pub fn total_value(&self) -> i64 {
        self.transactions
            .iter()
            .map(|tx| i64::from(tx.value()))
            .sum()
    }

    /// Transaction with the lowest value
    ///
    /// When several transactions share the minimum, the earliest added one wins.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyCollection`] if the store holds no transactions
    pub fn lowest_value_transaction(&self) -> Result<&Transaction, QueryError> {
        self.transactions
            .iter()
            .min_by_key(|tx| tx.value())
            .ok_or_else(|| empty_store("lowest value transaction"))
    }

    /// Names of all referenced traders, sorted ascending, concatenated without a separator
    ///
    /// Each trader contributes its name once. Distinct traders sharing a name each
    /// contribute it. An empty store yields an empty string.
    pub fn trader_names(&self) -> String {
        let mut traders: Vec<&TraderRef> = self.distinct_traders().collect();
        traders.sort_by(|a, b| a.name().cmp(b.name()));
        traders.iter().map(|trader| trader.name()).collect()
    }

    /// Referenced traders, each once by identity, in first-encountered order
    fn distinct_traders(&self) -> impl Iterator<Item = &TraderRef> {
        let mut seen: HashSet<*const Trader> = HashSet::new();
        self.transactions
            .iter()
            .map(Transaction::trader)
            .filter(move |trader| seen.insert(Rc::as_ptr(trader)))
    }
}

fn empty_store(operation: &str) -> QueryError {
    debug!(operation, "query on empty transaction store");
    QueryError::empty_collection(operation)
}

impl FromIterator<Transaction> for TransactionStore {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        TransactionStore {
            transactions: iter.into_iter().collect(),
        }
    }
}

impl Extend<Transaction> for TransactionStore {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        for tx in iter {
            self.add(tx);
        }
    }
}

impl<'a> IntoIterator for &'a TransactionStore {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
