//! Core business logic module
//!
//! This module contains the query components:
//! - `transaction_store` - Ordered transaction history, queries and trader relocation

pub mod transaction_store;

pub use transaction_store::TransactionStore;
