// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use jet_permutation::encoding::PositionSet;
use jet_permutation::PermutationEngine;
use std::collections::HashSet;

/// A stand-in for a reconstructed jet, identified by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Jet {
    pub id: u32,
}

pub fn jets(count: u32) -> Vec<Jet> {
    (1..=count).map(|id| Jet { id }).collect()
}

/// One reported split, as (leptonic, hadronic) position sets.
pub type Observed = (PositionSet, PositionSet);

/// Walk the current session to exhaustion, starting from the entry the
/// cursor points at, and record every reported split.
pub fn walk(engine: &mut PermutationEngine) -> Vec<Observed> {
    let mut observed = Vec::new();
    loop {
        let leptonic = engine.leptonic_set().unwrap();
        let hadronic = engine.hadronic_set().unwrap();
        if leptonic.is_empty() && hadronic.is_empty() {
            break;
        }
        observed.push((leptonic, hadronic));
        if !engine.next() {
            break;
        }
    }
    observed
}

/// Orientation-free form of a split.
pub fn unordered((a, b): Observed) -> (PositionSet, PositionSet) {
    if a.bits() <= b.bits() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Every unordered split of every subset of `0..n` with at least two
/// positions, computed by brute force over bitmasks.
pub fn expected_splits(n: usize) -> HashSet<(PositionSet, PositionSet)> {
    let mut expected = HashSet::new();
    for subset in 0u64..(1 << n) {
        if subset.count_ones() < 2 {
            continue;
        }
        // Every non-empty proper sub-mask of `subset`.
        let mut left = (subset - 1) & subset;
        while left != 0 {
            let right = subset & !left;
            expected.insert(unordered((
                PositionSet::from_bits(left),
                PositionSet::from_bits(right),
            )));
            left = (left - 1) & subset;
        }
    }
    expected
}

/// Shorthand for a position set.
pub fn set(positions: &[usize]) -> PositionSet {
    PositionSet::from_positions(positions)
}
