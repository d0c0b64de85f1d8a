// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial enumeration primitives.

pub mod arrangements;

pub use arrangements::Arrangements;
