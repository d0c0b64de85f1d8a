// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compact encodings of item selections.
//!
//! This module contains the value types shared by the table builder and the
//! engine:
//! - SplitEncoding: a split as two products of distinct primes
//! - PositionSet: bitset of item positions, the decoded form of a product
//! - constants: item bound and closed-form table sizes

pub mod constants;
pub mod position_set;
pub mod split;

pub use constants::*;
pub use position_set::PositionSet;
pub use split::SplitEncoding;
