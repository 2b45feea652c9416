//! Trader Ledger Library
//! # Overview
//!
//! This library provides an in-memory query layer over a list of trades between traders:
//! filtering by year, grouping, aggregation and trader relocation.
//!
//! # Architecture
//!
//! The system is organized into two components:
//!
//! - [`types`] - Core data types (Trader, Transaction, QueryError)
//! - [`core`] - Business logic components:
//!   - [`core::transaction_store`] - Ordered transaction history and its queries
//!
//! # Sharing Traders
//!
//! Traders are shared between transactions through [`TraderRef`] handles. Relocating a
//! trader updates the single shared record, so every transaction referencing it sees the
//! new city. Two traders with the same name are different traders unless they are the
//! same handle.
//!
//! ```
//! use std::rc::Rc;
//! use trader_ledger::{Trader, Transaction, TransactionStore};
//!
//! let alice = Rc::new(Trader::new("Alice", "London"));
//! let bob = Rc::new(Trader::new("Bob", "Paris"));
//!
//! let mut store = TransactionStore::new();
//! store.add(Transaction::new(2015, 100, &alice));
//! store.add(Transaction::new(2015, 50, &bob));
//! store.add(Transaction::new(2016, 200, &alice));
//!
//! assert_eq!(store.total_value(), 350);
//! assert_eq!(store.trader_names(), "AliceBob");
//!
//! store.relocate_traders("London", "Paris");
//! assert_eq!(alice.city(), "Paris");
//! ```
//!
//! # Thread Safety
//!
//! The store is not thread-safe. Trader handles are `Rc` based, so neither the store nor
//! its transactions can be sent across threads.

// Module declarations
pub mod core;
pub mod types;

pub use crate::core::TransactionStore;
pub use types::{QueryError, Trader, TraderRef, Transaction, Value, Year};
