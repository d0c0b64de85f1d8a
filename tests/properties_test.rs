// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for walks over permutation tables.

mod common;

use common::{unordered, walk};
use jet_permutation::encoding::{table_len, PositionSet, MAX_ITEMS};
use jet_permutation::primes::IndexPrimeMap;
use jet_permutation::PermutationEngine;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    /// Property: table size depends only on the item count
    #[test]
    fn prop_table_len_closed_form(n in 0usize..=7) {
        let mut engine = PermutationEngine::new();
        engine.init_len(n).unwrap();
        prop_assert_eq!(engine.table_len(), Some(table_len(n as u64) as usize));
    }

    /// Property: every reported split partitions a subset into two
    /// non-empty, disjoint sides, and every entry is reported twice
    #[test]
    fn prop_walk_partitions(n in 2usize..=6) {
        let mut engine = PermutationEngine::new();
        engine.init_len(n).unwrap();
        let observed = walk(&mut engine);

        prop_assert_eq!(observed.len() as u64, 2 * table_len(n as u64));
        let full = PositionSet::first(n);
        for &(leptonic, hadronic) in &observed {
            prop_assert!(!leptonic.is_empty() && !hadronic.is_empty());
            prop_assert!(leptonic.is_disjoint(hadronic));
            let subset = leptonic.union(hadronic);
            prop_assert!(subset.len() >= 2);
            prop_assert_eq!(subset.intersection(full), subset);
        }

        let distinct: HashSet<_> = observed.iter().copied().map(unordered).collect();
        prop_assert_eq!(distinct.len() as u64, table_len(n as u64));
    }

    /// Property: the order of sessions does not change what a session sees
    #[test]
    fn prop_session_order_independent(sizes in prop::collection::vec(0usize..=5, 1..6)) {
        let mut shared = PermutationEngine::new();
        for &n in &sizes {
            shared.init_len(n).unwrap();
            let mut fresh = PermutationEngine::new();
            fresh.init_len(n).unwrap();
            prop_assert_eq!(walk(&mut shared), walk(&mut fresh));
        }
        let max = sizes.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(shared.prime_map().len(), max);
    }

    /// Property: positions round-trip through the prime encoding
    #[test]
    fn prop_encode_decode_roundtrip(bits in 0u64..(1 << 15)) {
        let mut map = IndexPrimeMap::new();
        map.expand(MAX_ITEMS);
        let positions = PositionSet::from_bits(bits);
        let product = map.encode(positions).unwrap();
        prop_assert_eq!(map.decode(product).unwrap(), positions);
    }
}
