// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-engine mutable bookkeeping.

pub mod statistics;

pub use statistics::{Counters, Statistics};
