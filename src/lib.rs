// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerate every way to split a set of jets into a leptonic and a hadronic
//! side, reusing precomputed permutation tables across events.
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Precomputed data that depends only on the number of items:
//! - Permutation tables: every split of every subset of size 2..n, with
//!   swapped duplicates removed (`(3^n - 2^(n+1) + 1) / 2` entries)
//! - The table cache, keyed by item count and shareable between engines
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Session state that changes as the caller walks a table:
//! - Position → prime assignment (grows only)
//! - Cursor: current table entry and orientation
//! - Statistics
//!
//! # Encoding
//!
//! Each item position is labelled with a distinct prime. A side of a split is
//! stored as the product of its positions' primes, and decoded by dividing
//! the primes back out. Products must fit in a `u64`, so at most
//! [`MAX_ITEMS`](encoding::MAX_ITEMS) items can be permuted.
//!
//! # Iteration
//!
//! Every table entry is reported twice, first as stored and then with the
//! sides swapped, so both orientations are visited without storing both.
//!
//! ```
//! use jet_permutation::PermutationEngine;
//!
//! let jets = vec!["b-jet", "light-1", "light-2"];
//! let mut engine = PermutationEngine::new();
//! engine.init(&jets).unwrap();
//!
//! let mut hypotheses = 0;
//! loop {
//!     let leptonic = engine.leptonic_jets(&jets).unwrap();
//!     let hadronic = engine.hadronic_jets(&jets).unwrap();
//!     assert!(leptonic.iter().all(|jet| !hadronic.contains(jet)));
//!     hypotheses += 1;
//!     if !engine.next() {
//!         break;
//!     }
//! }
//! assert_eq!(hypotheses, 12);
//! ```

pub mod combinatorics;
pub mod encoding;
pub mod engine;
pub mod errors;
pub mod memo;
pub mod primes;
pub mod state;

// Re-export commonly used types
pub use engine::{EngineConfig, EngineState, JetSplit, PermutationEngine, Splits};
pub use errors::{PermutationError, Result};
pub use memo::{PermutationTable, TableCache};
