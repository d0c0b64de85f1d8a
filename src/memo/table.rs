// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Permutation table generation.
//!
//! A permutation table lists every way to split a subset of `n` items into
//! two non-empty sides, with each side encoded as a product of primes.
//!
//! # Table Generation Algorithm
//!
//! Splits are generated in a fixed order so that tables are deterministic:
//! 1. Grouped by subset size (from 2 to n)
//! 2. Within each size, ordered by arrangement (lexicographic k-permutations)
//! 3. Within each arrangement, ordered by split point (1 to size-1)
//!
//! A split is appended only if neither it nor its swap is already present.
//! The first orientation generated is the one stored.
//!
//! # Example
//!
//! For n=3 with primes (2, 3, 5), the table holds 6 splits:
//! - 2|3, 2|5, 3|5 (subset size 2)
//! - 2|15, 6|5, 10|3 (subset size 3)

use crate::combinatorics::Arrangements;
use crate::encoding::{SplitEncoding, MIN_SUBSET_SIZE};
use crate::errors::{PermutationError, Result};
use std::collections::HashSet;

/// Counts gathered while building a table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Arrangements visited across all subset sizes.
    pub arrangements: u64,
    /// Splits skipped because their swap was already stored.
    pub duplicates: u64,
}

/// Deduplicated splits for one item count.
///
/// Immutable once built; shared between sessions (and engines) through an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct PermutationTable {
    item_count: usize,
    splits: Vec<SplitEncoding>,
    report: BuildReport,
}

impl PermutationTable {
    /// Build the table for `primes.len()` items.
    ///
    /// `primes[i]` is the prime assigned to position `i`. Fewer than two
    /// primes give an empty table.
    pub fn build(primes: &[u64]) -> Result<Self> {
        let item_count = primes.len();
        tracing::debug!(item_count, "[PermutationTable] Generating splits...");

        let mut splits = Vec::new();
        let mut seen = HashSet::new();
        let mut report = BuildReport::default();
        let overflow = || PermutationError::EncodingOverflow { item_count };

        for size in MIN_SUBSET_SIZE..=item_count {
            let mut arrangements = Arrangements::new(primes, size);
            while !arrangements.is_exhausted() {
                report.arrangements += 1;
                for point in 1..size {
                    let Some((left, right)) = arrangements.split(point) else {
                        break;
                    };
                    let left = checked_product(left).ok_or_else(overflow)?;
                    let right = checked_product(right).ok_or_else(overflow)?;

                    let split = SplitEncoding::new(left, right);
                    if seen.insert(split) {
                        splits.push(split);
                    } else {
                        report.duplicates += 1;
                    }
                }
                arrangements.advance();
            }
        }

        tracing::info!(
            item_count,
            splits = splits.len(),
            arrangements = report.arrangements,
            duplicates = report.duplicates,
            "[PermutationTable] Generated permutation table"
        );

        Ok(Self {
            item_count,
            splits,
            report,
        })
    }

    /// Number of items this table partitions.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Get a split by its index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<SplitEncoding> {
        self.splits.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.splits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    pub fn splits(&self) -> &[SplitEncoding] {
        &self.splits
    }

    pub fn iter(&self) -> impl Iterator<Item = SplitEncoding> + '_ {
        self.splits.iter().copied()
    }

    pub fn report(&self) -> BuildReport {
        self.report
    }
}

fn checked_product<'a>(mut primes: impl Iterator<Item = &'a u64>) -> Option<u64> {
    primes.try_fold(1u64, |product, &prime| product.checked_mul(prime))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{raw_split_count, table_len};

    const PRIMES: [u64; 7] = [2, 3, 5, 7, 11, 13, 17];

    #[test]
    fn test_empty_and_single() {
        assert!(PermutationTable::build(&[]).unwrap().is_empty());
        let single = PermutationTable::build(&[2]).unwrap();
        assert!(single.is_empty());
        assert_eq!(single.item_count(), 1);
    }

    #[test]
    fn test_two_items() {
        let table = PermutationTable::build(&PRIMES[..2]).unwrap();
        assert_eq!(table.splits(), &[SplitEncoding::new(2, 3)]);
        assert_eq!(table.get(0).map(|s| (s.left(), s.right())), Some((2, 3)));
        assert_eq!(table.get(1), None);
    }

    #[test]
    fn test_three_items_in_order() {
        let table = PermutationTable::build(&PRIMES[..3]).unwrap();
        let stored: Vec<(u64, u64)> = table.iter().map(|s| (s.left(), s.right())).collect();
        assert_eq!(
            stored,
            vec![(2, 3), (2, 5), (3, 5), (2, 15), (6, 5), (10, 3)]
        );
    }

    #[test]
    fn test_sizes_match_closed_form() {
        for n in 0..=PRIMES.len() {
            let table = PermutationTable::build(&PRIMES[..n]).unwrap();
            assert_eq!(table.len() as u64, table_len(n as u64), "n = {}", n);
            assert_eq!(
                table.report().duplicates,
                raw_split_count(n as u64) - table_len(n as u64),
                "n = {}",
                n
            );
        }
    }

    #[test]
    fn test_no_swapped_duplicates() {
        let table = PermutationTable::build(&PRIMES[..5]).unwrap();
        let canonical: HashSet<(u64, u64)> = table.iter().map(|s| s.canonical()).collect();
        assert_eq!(canonical.len(), table.len());
    }

    #[test]
    fn test_sides_are_coprime() {
        fn gcd(a: u64, b: u64) -> u64 {
            if b == 0 {
                a
            } else {
                gcd(b, a % b)
            }
        }
        let table = PermutationTable::build(&PRIMES[..5]).unwrap();
        for split in table.iter() {
            assert!(split.left() > 1 && split.right() > 1);
            assert_eq!(gcd(split.left(), split.right()), 1, "{}", split);
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let huge = [u64::MAX / 2, 3, 5];
        assert_eq!(
            PermutationTable::build(&huge).unwrap_err(),
            PermutationError::EncodingOverflow { item_count: 3 }
        );
    }
}
