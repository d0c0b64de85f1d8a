// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SplitEncoding: one leptonic/hadronic split as a pair of prime products.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A split of a subset of positions into a left and a right side.
///
/// Each side is the product of the primes assigned to its positions. The two
/// products share no prime factor.
///
/// Equality ignores orientation: `(a, b) == (b, a)`. Hashing uses the
/// canonical `(min, max)` pair so that it agrees with equality, which lets a
/// table deduplicate swapped splits with a hash set.
#[derive(Debug, Clone, Copy)]
pub struct SplitEncoding {
    left: u64,
    right: u64,
}

impl SplitEncoding {
    pub const fn new(left: u64, right: u64) -> Self {
        Self { left, right }
    }

    /// Product of the primes on the left (leptonic) side, in storage order.
    pub const fn left(&self) -> u64 {
        self.left
    }

    /// Product of the primes on the right (hadronic) side, in storage order.
    pub const fn right(&self) -> u64 {
        self.right
    }

    /// The same split with its sides exchanged.
    pub const fn swapped(&self) -> Self {
        Self {
            left: self.right,
            right: self.left,
        }
    }

    /// Orientation-free key: `(min, max)` of the two products.
    pub fn canonical(&self) -> (u64, u64) {
        if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }
}

impl PartialEq for SplitEncoding {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for SplitEncoding {}

impl Hash for SplitEncoding {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for SplitEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_swap_equivalence() {
        let a = SplitEncoding::new(2, 15);
        let b = SplitEncoding::new(15, 2);
        assert_eq!(a, b);
        assert_eq!(a.canonical(), (2, 15));
        assert_eq!(b.canonical(), (2, 15));
    }

    #[test]
    fn test_distinct_splits() {
        assert_ne!(SplitEncoding::new(2, 15), SplitEncoding::new(3, 10));
    }

    #[test]
    fn test_swapped_keeps_storage_order() {
        let split = SplitEncoding::new(6, 5).swapped();
        assert_eq!(split.left(), 5);
        assert_eq!(split.right(), 6);
    }

    #[test]
    fn test_hash_set_dedups_swaps() {
        let mut set = HashSet::new();
        assert!(set.insert(SplitEncoding::new(2, 3)));
        assert!(!set.insert(SplitEncoding::new(3, 2)));
        assert!(set.insert(SplitEncoding::new(2, 5)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SplitEncoding::new(2, 15)), "2|15");
    }
}
