// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PositionSet type for representing sets of item positions as bitsets.
//!
//! Decoding a prime product yields the positions whose primes divide it.
//! Those positions are collected into a PositionSet, where bit i represents
//! position i of the caller's item slice.
//!
//! # Examples
//!
//! ```
//! use jet_permutation::encoding::PositionSet;
//!
//! let mut set = PositionSet::empty();
//! set.insert(2);
//! set.insert(0);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{0,2}");
//!
//! // Positions are always yielded in ascending order
//! let positions: Vec<usize> = set.iter().collect();
//! assert_eq!(positions, vec![0, 2]);
//! ```

use crate::encoding::constants::MAX_ITEMS;
use std::fmt;

/// Bits that can hold a position.
const POSITION_MASK: u64 = (1 << MAX_ITEMS) - 1;

/// A set of item positions represented as a bitset.
///
/// Bit i (counting from LSB) is set if position i is in the set. Only the
/// low `MAX_ITEMS` bits are ever set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionSet(u64);

impl PositionSet {
    /// Create an empty position set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a set holding every position in `0..count`.
    ///
    /// # Panics
    ///
    /// Panics if `count > MAX_ITEMS`.
    pub fn first(count: usize) -> Self {
        assert!(count <= MAX_ITEMS, "Position out of range: {}", count);
        Self((1u64 << count) - 1)
    }

    /// Create a position set from a slice of positions.
    pub fn from_positions(positions: &[usize]) -> Self {
        let mut set = Self::empty();
        for &position in positions {
            set.insert(position);
        }
        set
    }

    /// Create a position set from a raw bit value.
    ///
    /// Bits at or above `MAX_ITEMS` are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits & POSITION_MASK)
    }

    /// Check if the set contains a position.
    pub fn contains(self, position: usize) -> bool {
        position < MAX_ITEMS && (self.0 >> position) & 1 != 0
    }

    /// Insert a position into the set.
    ///
    /// # Panics
    ///
    /// Panics if `position >= MAX_ITEMS`.
    pub fn insert(&mut self, position: usize) {
        assert!(position < MAX_ITEMS, "Position out of range: {}", position);
        self.0 |= 1 << position;
    }

    /// Remove a position from the set.
    pub fn remove(&mut self, position: usize) {
        if position < MAX_ITEMS {
            self.0 &= !(1 << position);
        }
    }

    /// Number of positions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u64 {
        self.0
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// True if the two sets share no position.
    pub fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    /// Iterate over all positions in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        PositionSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over positions in a PositionSet.
struct PositionSetIter {
    bits: u64,
    index: usize,
}

impl Iterator for PositionSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < MAX_ITEMS {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(idx);
            }
        }
        None
    }
}

impl fmt::Display for PositionSet {
    /// Format a position set as "{0,2,5}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, position) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", position)?;
        }
        write!(f, "}}")
    }
}

impl From<&[usize]> for PositionSet {
    fn from(positions: &[usize]) -> Self {
        Self::from_positions(positions)
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::empty();
        for position in iter {
            set.insert(position);
        }
        set
    }
}
