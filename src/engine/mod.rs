// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Jet permutation engine.
//!
//! The engine partitions an ordered sequence of items into a leptonic and a
//! hadronic side, over every subset of at least two items and every way to
//! split that subset. Splits come from a [`PermutationTable`] cached by item
//! count, so a second session with the same number of items starts in O(1).
//!
//! # Architecture
//!
//! The engine holds:
//! - an [`IndexPrimeMap`] giving each item position a distinct prime
//! - a [`TableCache`] of tables keyed by item count (optionally shared)
//! - the live session: the active table and a two-phase [`Cursor`]
//!
//! The engine never stores items. `init` only records how many there are;
//! callers pass the same slice back to resolve positions into references.
//!
//! # States
//!
//! 1. Uninitialized: no session yet, queries fail
//! 2. Active: the cursor points at a table entry
//! 3. Exhausted: the cursor passed the last entry, queries return nothing
//!
//! # Example
//!
//! ```
//! use jet_permutation::PermutationEngine;
//!
//! let jets = ["j1", "j2", "j3"];
//! let mut engine = PermutationEngine::new();
//! engine.init(&jets).unwrap();
//!
//! let mut total = 0;
//! loop {
//!     let leptonic = engine.leptonic_jets(&jets).unwrap();
//!     let hadronic = engine.hadronic_jets(&jets).unwrap();
//!     assert!(!leptonic.is_empty() && !hadronic.is_empty());
//!     total += 1;
//!     if !engine.next() {
//!         break;
//!     }
//! }
//! // 6 table entries, each reported straight and swapped
//! assert_eq!(total, 12);
//! ```

pub mod config;
pub mod cursor;
pub mod splits;

pub use config::EngineConfig;
pub use cursor::{Cursor, Orientation};
pub use splits::{JetSplit, Splits};

use crate::encoding::{PositionSet, SplitEncoding};
use crate::errors::{PermutationError, Result};
use crate::memo::{PermutationTable, TableCache};
use crate::primes::IndexPrimeMap;
use crate::state::{Counters, Statistics};
use std::sync::Arc;

/// Lifecycle state of a [`PermutationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Active,
    Exhausted,
}

/// The table and cursor of the current session.
#[derive(Debug)]
struct Session {
    table: Arc<PermutationTable>,
    cursor: Cursor,
}

/// Enumerates leptonic/hadronic splits of an item sequence.
///
/// `init` and `next` take `&mut self`. Several
/// engines may share tables through [`PermutationEngine::with_cache`].
#[derive(Debug)]
pub struct PermutationEngine {
    config: EngineConfig,
    primes: IndexPrimeMap,
    tables: TableCache,
    session: Option<Session>,
    statistics: Statistics,
}

impl PermutationEngine {
    /// Create an engine with its own table cache.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), TableCache::new())
    }

    /// Create an engine that shares `cache` with other engines.
    pub fn with_cache(cache: TableCache) -> Self {
        Self::with_config(EngineConfig::default(), cache)
    }

    pub fn with_config(config: EngineConfig, cache: TableCache) -> Self {
        Self {
            config,
            primes: IndexPrimeMap::new(),
            tables: cache,
            session: None,
            statistics: Statistics::new(),
        }
    }

    /// Start a session over `items`.
    ///
    /// Only the length of `items` is recorded. The first session for a given
    /// length builds its table; later sessions reuse it. The cursor is reset
    /// to the first entry, straight orientation.
    ///
    /// On error the engine is left uninitialized.
    pub fn init<T>(&mut self, items: &[T]) -> Result<()> {
        self.init_len(items.len())
    }

    /// Start a session over `item_count` items.
    pub fn init_len(&mut self, item_count: usize) -> Result<()> {
        self.session = None;

        let max = self.config.max_items();
        if item_count > max {
            return Err(PermutationError::TooManyItems {
                items: item_count,
                max,
            });
        }

        let assigned = self.primes.expand(item_count);
        if assigned > 0 {
            tracing::debug!(
                assigned,
                total = self.primes.len(),
                "assigned primes to new positions"
            );
            self.statistics.add(Counters::PrimesAssigned, assigned as u64);
        }

        let (table, built) = self.tables.get_or_build(item_count)?;

        if built {
            let report = table.report();
            self.statistics.increment_counter(Counters::TablesBuilt);
            self.statistics.add(Counters::ArrangementsVisited, report.arrangements);
            self.statistics.add(Counters::DuplicateSplits, report.duplicates);
        } else {
            tracing::debug!(item_count, splits = table.len(), "reusing permutation table");
            self.statistics.increment_counter(Counters::TablesReused);
        }
        self.statistics.increment_counter(Counters::Sessions);

        self.session = Some(Session {
            cursor: Cursor::new(table.len()),
            table,
        });
        Ok(())
    }

    /// Move to the next split.
    ///
    /// Each table entry is reported straight, then swapped, then the cursor
    /// moves on. Returns false once every entry has been reported (and on
    /// every later call), or if no session was started.
    pub fn next(&mut self) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                let valid = session.cursor.advance();
                tracing::trace!(
                    position = session.cursor.position(),
                    orientation = ?session.cursor.orientation(),
                    valid,
                    "advanced cursor"
                );
                valid
            }
            None => false,
        }
    }

    pub fn state(&self) -> EngineState {
        match &self.session {
            None => EngineState::Uninitialized,
            Some(session) if session.cursor.is_exhausted() => EngineState::Exhausted,
            Some(_) => EngineState::Active,
        }
    }

    /// The current split, oriented as reported: `left` is leptonic.
    ///
    /// None once the session is exhausted.
    pub fn current_split(&self) -> Result<Option<SplitEncoding>> {
        let session = self
            .session
            .as_ref()
            .ok_or(PermutationError::Uninitialized)?;
        if session.cursor.is_exhausted() {
            return Ok(None);
        }
        Ok(session
            .table
            .get(session.cursor.position())
            .map(|split| session.cursor.orient(split)))
    }

    /// Positions on the leptonic side of the current split.
    pub fn leptonic_set(&self) -> Result<PositionSet> {
        match self.current_split()? {
            Some(split) => self.primes.decode(split.left()),
            None => Ok(PositionSet::empty()),
        }
    }

    /// Positions on the hadronic side of the current split.
    pub fn hadronic_set(&self) -> Result<PositionSet> {
        match self.current_split()? {
            Some(split) => self.primes.decode(split.right()),
            None => Ok(PositionSet::empty()),
        }
    }

    /// Leptonic positions, ascending.
    pub fn leptonic_positions(&self) -> Result<Vec<usize>> {
        Ok(self.leptonic_set()?.iter().collect())
    }

    /// Hadronic positions, ascending.
    pub fn hadronic_positions(&self) -> Result<Vec<usize>> {
        Ok(self.hadronic_set()?.iter().collect())
    }

    /// Leptonic items of the current split, in position order.
    ///
    /// `items` must be the slice (or one of the same length) the session
    /// was started with.
    pub fn leptonic_jets<'i, T>(&self, items: &'i [T]) -> Result<Vec<&'i T>> {
        let positions = self.leptonic_set()?;
        self.resolve(positions, items)
    }

    /// Hadronic items of the current split, in position order.
    pub fn hadronic_jets<'i, T>(&self, items: &'i [T]) -> Result<Vec<&'i T>> {
        let positions = self.hadronic_set()?;
        self.resolve(positions, items)
    }

    /// Start a session over `items` and iterate every split of it.
    pub fn splits<'e, 'i, T>(&'e mut self, items: &'i [T]) -> Result<Splits<'e, 'i, T>> {
        self.init(items)?;
        Ok(Splits::new(self, items))
    }

    /// Number of items in the current session.
    pub fn item_count(&self) -> Option<usize> {
        self.session
            .as_ref()
            .map(|session| session.table.item_count())
    }

    /// Number of entries in the current session's table.
    pub fn table_len(&self) -> Option<usize> {
        self.session.as_ref().map(|session| session.table.len())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn prime_map(&self) -> &IndexPrimeMap {
        &self.primes
    }

    pub fn table_cache(&self) -> &TableCache {
        &self.tables
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    fn resolve<'i, T>(&self, positions: PositionSet, items: &'i [T]) -> Result<Vec<&'i T>> {
        let expected = self.item_count().unwrap_or_default();
        if items.len() != expected {
            return Err(PermutationError::ItemCountMismatch {
                expected,
                actual: items.len(),
            });
        }
        Ok(positions.iter().map(|position| &items[position]).collect())
    }
}

impl Default for PermutationEngine {
    fn default() -> Self {
        Self::new()
    }
}
