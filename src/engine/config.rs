// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Engine configuration.

use crate::encoding::MAX_ITEMS;

/// Limits applied by a [`PermutationEngine`](crate::PermutationEngine).
///
/// Table construction visits every ordered arrangement of every subset, so
/// its cost grows factorially with the item count. `max_items` lets callers
/// reject large sessions up front; it can never exceed [`MAX_ITEMS`], the
/// largest count whose prime products fit in a `u64`.
///
/// # Example
///
/// ```
/// use jet_permutation::EngineConfig;
///
/// let config = EngineConfig::new().with_max_items(8);
/// assert_eq!(config.max_items(), 8);
///
/// // Clamped to what the encoding supports
/// assert_eq!(EngineConfig::new().with_max_items(100).max_items(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    max_items: usize,
}

impl EngineConfig {
    /// Allow up to [`MAX_ITEMS`] items.
    ///
    /// Building the table for `MAX_ITEMS` items visits about `e * 15!`
    /// arrangements. Callers that may see large inputs should lower the
    /// limit with [`with_max_items`](Self::with_max_items).
    pub fn new() -> Self {
        Self {
            max_items: MAX_ITEMS,
        }
    }

    /// Reject sessions with more than `max_items` items.
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items.min(MAX_ITEMS);
        self
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_every_encodable_count() {
        assert_eq!(EngineConfig::default().max_items(), MAX_ITEMS);
        assert_eq!(EngineConfig::new().with_max_items(0).max_items(), 0);
    }
}
