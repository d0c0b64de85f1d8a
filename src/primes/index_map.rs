// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Assignment of one distinct prime to each item position.

use crate::encoding::{PositionSet, MAX_ITEMS};
use crate::errors::{PermutationError, Result};
use crate::primes::PrimeSource;

/// Grow-only map from item position to a distinct prime.
///
/// Position `i` receives the (i+1)-th prime the first time a session with
/// more than `i` items is seen. Assignments are never revoked, so every
/// table built from this map stays valid for the life of the engine.
///
/// Because primes are assigned in generation order, two maps that have seen
/// the same number of positions are identical. Tables built by one engine
/// can therefore be shared with another.
#[derive(Debug, Clone, Default)]
pub struct IndexPrimeMap {
    source: PrimeSource,
    /// primes[position], ascending.
    primes: Vec<u64>,
}

impl IndexPrimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure positions `0..count` all have a prime.
    ///
    /// At most `MAX_ITEMS` positions are ever assigned, since no product of
    /// more primes fits in a `u64`. Returns the number of positions that were
    /// newly assigned.
    pub fn expand(&mut self, count: usize) -> usize {
        let count = count.min(MAX_ITEMS);
        let before = self.primes.len();
        while self.primes.len() < count {
            self.primes.push(self.source.current());
            self.source.advance();
        }
        self.primes.len() - before
    }

    /// Number of positions with an assigned prime.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// The prime assigned to `position`, if any.
    pub fn prime(&self, position: usize) -> Option<u64> {
        self.primes.get(position).copied()
    }

    /// Primes of positions `0..count`, or None if some are unassigned.
    pub fn primes(&self, count: usize) -> Option<&[u64]> {
        self.primes.get(..count)
    }

    /// Product of the primes of every position in `positions`.
    ///
    /// Returns None if a position is unassigned or the product overflows.
    pub fn encode(&self, positions: PositionSet) -> Option<u64> {
        positions
            .iter()
            .try_fold(1u64, |product, position| product.checked_mul(self.prime(position)?))
    }

    /// Recover the positions whose primes divide `product`.
    ///
    /// Scans the assigned primes in ascending order and divides each one out
    /// when it divides the remainder. Fails if anything other than 1 is left
    /// once every prime has been tried.
    pub fn decode(&self, product: u64) -> Result<PositionSet> {
        let corrupt = |remainder| PermutationError::CorruptEncoding { product, remainder };
        if product == 0 {
            return Err(corrupt(0));
        }

        let mut positions = PositionSet::empty();
        let mut remainder = product;
        for (position, &prime) in self.primes.iter().enumerate() {
            if remainder == 1 {
                break;
            }
            if remainder % prime == 0 {
                remainder /= prime;
                positions.insert(position);
            }
        }

        if remainder != 1 {
            return Err(corrupt(remainder));
        }
        Ok(positions)
    }
}
