// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cache of permutation tables keyed by item count.

use crate::encoding::MAX_ITEMS;
use crate::errors::{PermutationError, Result};
use crate::memo::PermutationTable;
use crate::primes::PrimeSource;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Item count → permutation table, built lazily and kept for the life of
/// the cache.
///
/// Cloning a `TableCache` clones the handle, not the tables: every clone
/// sees the same map. Engines created with
/// [`PermutationEngine::with_cache`](crate::PermutationEngine::with_cache)
/// share tables this way. Lookups take the read lock. A missing table is
/// built with no lock held and inserted under the write lock, so a long
/// build never blocks sessions on other item counts.
///
/// Tables are always built over the first `item_count` primes, which is
/// what every engine assigns to positions `0..item_count`. A table built for
/// one engine therefore decodes correctly in another.
#[derive(Debug, Clone, Default)]
pub struct TableCache {
    tables: Arc<RwLock<HashMap<usize, Arc<PermutationTable>>>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached table for `item_count`, if one was built.
    pub fn get(&self, item_count: usize) -> Option<Arc<PermutationTable>> {
        self.tables.read().get(&item_count).cloned()
    }

    /// The table for `item_count` items, building it if needed.
    ///
    /// Returns the table and whether this call built it. When two handles
    /// race to build the same table, the first to insert wins and the other
    /// gets that table back.
    pub fn get_or_build(&self, item_count: usize) -> Result<(Arc<PermutationTable>, bool)> {
        if let Some(table) = self.get(item_count) {
            return Ok((table, false));
        }
        if item_count > MAX_ITEMS {
            return Err(PermutationError::TooManyItems {
                items: item_count,
                max: MAX_ITEMS,
            });
        }

        let primes: Vec<u64> = PrimeSource::new().take(item_count).collect();
        let table = Arc::new(PermutationTable::build(&primes)?);

        match self.tables.write().entry(item_count) {
            Entry::Occupied(entry) => Ok((Arc::clone(entry.get()), false)),
            Entry::Vacant(entry) => {
                entry.insert(Arc::clone(&table));
                Ok((table, true))
            }
        }
    }

    pub fn contains(&self, item_count: usize) -> bool {
        self.tables.read().contains_key(&item_count)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Item counts with a cached table, ascending.
    pub fn item_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.tables.read().keys().copied().collect();
        counts.sort_unstable();
        counts
    }
}
