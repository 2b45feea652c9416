//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `trader`: Trader records and shared handles
//! - `transaction`: Transaction records and their field types
//! - `error`: Error types for store queries

pub mod error;
pub mod trader;
pub mod transaction;

pub use error::QueryError;
pub use trader::{Trader, TraderRef};
pub use transaction::{Transaction, Value, Year};
