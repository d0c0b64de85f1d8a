// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Prime numbers used as position labels.
//!
//! - PrimeSource: infinite cursor over the primes
//! - IndexPrimeMap: grow-only position → prime assignment, with the
//!   product encode/decode used by permutation tables

pub mod index_map;
pub mod source;

pub use index_map::IndexPrimeMap;
pub use source::PrimeSource;
