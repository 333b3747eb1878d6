//! Bounded memo cache for enumeration results

use crate::core::types::{Cost, CostSpread};
use ahash::AHashMap;

/// Memo key: slots left, budget left, largest cost allowed in the head slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpreadKey {
    pub slots: usize,
    pub total: Cost,
    pub max_cost: Cost,
}

impl SpreadKey {
    pub fn new(slots: usize, total: Cost, max_cost: Cost) -> Self {
        Self {
            slots,
            total,
            max_cost,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    spreads: Vec<CostSpread>,
    last_used: u64,
}

/// Hit/miss counters, reported at debug level after each top-level call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

/// Fixed-capacity map with least-recently-used eviction
#[derive(Debug, Clone)]
pub struct SpreadCache {
    entries: AHashMap<SpreadKey, CacheEntry>,
    capacity: usize,
    clock: u64,
    stats: CacheStats,
}

impl SpreadCache {
    /// Capacity is clamped to at least one entry
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: AHashMap::with_capacity(capacity),
            capacity,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    pub fn get(&mut self, key: &SpreadKey) -> Option<Vec<CostSpread>> {
        self.clock += 1;
        match self.entries.get_mut(key) {
            Some(entry) => {
                entry.last_used = self.clock;
                self.stats.hits += 1;
                Some(entry.spreads.clone())
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, key: SpreadKey, spreads: Vec<CostSpread>) {
        self.clock += 1;
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.evict_oldest();
        }
        self.entries.insert(
            key,
            CacheEntry {
                spreads,
                last_used: self.clock,
            },
        );
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.stats.evictions += 1;
            tracing::trace!(?key, "evicted spread cache entry");
        }
    }

    pub fn contains(&self, key: &SpreadKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spreads(values: &[Cost]) -> Vec<CostSpread> {
        vec![CostSpread::new(values.to_vec())]
    }

    #[test]
    fn test_get_after_insert() {
        let mut cache = SpreadCache::new(4);
        let key = SpreadKey::new(2, 5, 9);
        assert!(cache.get(&key).is_none());

        cache.insert(key, spreads(&[5, 0]));
        assert_eq!(cache.get(&key), Some(spreads(&[5, 0])));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = SpreadCache::new(2);
        let a = SpreadKey::new(1, 1, 9);
        let b = SpreadKey::new(1, 2, 9);
        let c = SpreadKey::new(1, 3, 9);

        cache.insert(a, spreads(&[1]));
        cache.insert(b, spreads(&[2]));
        // Touch `a` so `b` becomes the oldest
        assert!(cache.get(&a).is_some());
        cache.insert(c, spreads(&[3]));

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(&a));
        assert!(!cache.contains(&b));
        assert!(cache.contains(&c));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_reinsert_does_not_evict() {
        let mut cache = SpreadCache::new(1);
        let key = SpreadKey::new(1, 1, 9);
        cache.insert(key, spreads(&[1]));
        cache.insert(key, spreads(&[1]));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let cache = SpreadCache::new(0);
        assert_eq!(cache.capacity(), 1);
    }
}
