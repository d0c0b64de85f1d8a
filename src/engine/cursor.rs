// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-phase cursor over a permutation table.
//!
//! Each table entry is reported twice before the cursor moves on:
//!
//! ```text
//! entry i, Straight ──advance──▶ entry i, Swapped ──advance──▶ entry i+1, Straight
//! ```
//!
//! Advancing from the swapped phase of the last entry leaves the cursor at
//! the end of the table, where it stays.

use crate::encoding::SplitEncoding;

/// Which orientation of the current entry is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Stored left side is leptonic.
    Straight,
    /// Stored right side is leptonic.
    Swapped,
}

/// Position within a table of `end` entries, plus the reported orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    position: usize,
    end: usize,
    orientation: Orientation,
}

impl Cursor {
    /// Cursor at the first entry of a table with `end` entries.
    pub fn new(end: usize) -> Self {
        Self {
            position: 0,
            end,
            orientation: Orientation::Straight,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.end
    }

    /// Step to the next (entry, orientation) pair.
    ///
    /// Returns true if the cursor now points at a valid entry. Once exhausted
    /// it always returns false and does not move.
    pub fn advance(&mut self) -> bool {
        if self.is_exhausted() {
            return false;
        }
        match self.orientation {
            Orientation::Straight => {
                self.orientation = Orientation::Swapped;
                true
            }
            Orientation::Swapped => {
                self.orientation = Orientation::Straight;
                self.position += 1;
                !self.is_exhausted()
            }
        }
    }

    /// Apply the current orientation to a stored split.
    pub fn orient(&self, split: SplitEncoding) -> SplitEncoding {
        match self.orientation {
            Orientation::Straight => split,
            Orientation::Swapped => split.swapped(),
        }
    }
}
