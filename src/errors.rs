// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for permutation engine sessions.

use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, PermutationError>;

/// Errors that can occur while building or walking permutation tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermutationError {
    /// Splits were queried before any successful `init`.
    #[error("jet permutations are not initialized")]
    Uninitialized,

    /// A product could not be factored by the assigned primes.
    ///
    /// Products are only built from assigned primes, so this means the
    /// table and the prime map disagree.
    #[error("product {product} has factor {remainder} outside the assigned primes")]
    CorruptEncoding { product: u64, remainder: u64 },

    /// The session holds more items than a `u64` product can encode, or more
    /// than the engine is configured to accept.
    #[error("{items} items requested, at most {max} can be permuted")]
    TooManyItems { items: usize, max: usize },

    /// A prime product overflowed while building a table.
    #[error("prime product overflowed u64 while building table for {item_count} items")]
    EncodingOverflow { item_count: usize },

    /// Positions were resolved against a slice of a different length than
    /// the one the session was initialized with.
    #[error("session has {expected} items but {actual} were supplied")]
    ItemCountMismatch { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            PermutationError::Uninitialized.to_string(),
            "jet permutations are not initialized"
        );
        assert_eq!(
            PermutationError::TooManyItems { items: 20, max: 15 }.to_string(),
            "20 items requested, at most 15 can be permuted"
        );
        assert_eq!(
            PermutationError::ItemCountMismatch {
                expected: 3,
                actual: 4
            }
            .to_string(),
            "session has 3 items but 4 were supplied"
        );
    }
}
