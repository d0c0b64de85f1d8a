// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable once built).
//!
//! Permutation tables depend only on the item count, so each is built once
//! and then reused by every session with that many items:
//! - PermutationTable: deduplicated splits for one item count
//! - TableCache: item count → table, shareable between engines

pub mod cache;
pub mod table;

pub use cache::TableCache;
pub use table::{BuildReport, PermutationTable};
