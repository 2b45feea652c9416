//! Error types for the Trader Ledger
//!
//! Almost every store query is total. The only failures are aggregations that have
//! no meaningful answer over zero transactions (maximum value, minimum transaction).

use thiserror::Error;

/// Main error type for store queries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query needs at least one transaction but the store is empty
    ///
    /// Sums are not affected: the total of an empty store is zero.
    #[error("Cannot compute {operation} of an empty transaction store")]
    EmptyCollection {
        /// Query that was attempted
        operation: String,
    },
}

impl QueryError {
    /// Create an EmptyCollection error
    pub fn empty_collection(operation: &str) -> Self {
        QueryError::EmptyCollection {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::highest_value(
        QueryError::EmptyCollection { operation: "highest value".to_string() },
        "Cannot compute highest value of an empty transaction store"
    )]
    #[case::lowest_value_transaction(
        QueryError::EmptyCollection { operation: "lowest value transaction".to_string() },
        "Cannot compute lowest value transaction of an empty transaction store"
    )]
    fn test_error_display(#[case] error: QueryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_helper_function() {
        assert_eq!(
            QueryError::empty_collection("highest value"),
            QueryError::EmptyCollection {
                operation: "highest value".to_string()
            }
        );
    }
}
