// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Iterator adapter over a whole session.

use crate::engine::{EngineState, PermutationEngine};
use crate::errors::Result;

/// One reported split, resolved to item references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JetSplit<'i, T> {
    pub leptonic: Vec<&'i T>,
    pub hadronic: Vec<&'i T>,
}

/// Iterator returned by [`PermutationEngine::splits`].
///
/// Yields the current split, then calls `next` on the engine, until the
/// session is exhausted. Each table entry is therefore yielded twice, once in
/// each orientation.
///
/// # Example
///
/// ```
/// use jet_permutation::PermutationEngine;
///
/// let jets = [1, 2, 3, 4];
/// let mut engine = PermutationEngine::new();
///
/// let mut count = 0;
/// for split in engine.splits(&jets).unwrap() {
///     let split = split.unwrap();
///     assert!(split.leptonic.len() + split.hadronic.len() >= 2);
///     count += 1;
/// }
/// assert_eq!(count, 50);
/// ```
pub struct Splits<'e, 'i, T> {
    engine: &'e mut PermutationEngine,
    items: &'i [T],
    started: bool,
}

impl<'e, 'i, T> Splits<'e, 'i, T> {
    pub(crate) fn new(engine: &'e mut PermutationEngine, items: &'i [T]) -> Self {
        Self {
            engine,
            items,
            started: false,
        }
    }

    fn current(&self) -> Result<JetSplit<'i, T>> {
        Ok(JetSplit {
            leptonic: self.engine.leptonic_jets(self.items)?,
            hadronic: self.engine.hadronic_jets(self.items)?,
        })
    }
}

impl<'i, T> Iterator for Splits<'_, 'i, T> {
    type Item = Result<JetSplit<'i, T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            if !self.engine.next() {
                return None;
            }
        } else {
            self.started = true;
            if self.engine.state() != EngineState::Active {
                return None;
            }
        }
        Some(self.current())
    }
}
