//! Exact enumeration of cost spreads
//!
//! A spread of `n` costs summing exactly to `total` is built head first:
//! each candidate head `c` must fit the remaining budget, must not exceed
//! the previous head (which keeps spreads non-increasing and so free of
//! permutation duplicates), and must be large enough that `n` slots capped
//! at `c` can still reach `total`. Results are memoized on
//! `(n, total, max_cost)`.

use crate::core::config::DEFAULT_CACHE_CAPACITY;
use crate::core::types::{Cost, CostSpread};
use crate::rules::cost_table::CostTable;
use crate::spread::cache::{CacheStats, SpreadCache, SpreadKey};

/// Memoizing enumerator over one immutable cost table
#[derive(Debug)]
pub struct SpreadEngine<'a> {
    table: &'a CostTable,
    cache: SpreadCache,
}

impl<'a> SpreadEngine<'a> {
    pub fn new(table: &'a CostTable) -> Self {
        Self::with_capacity(table, DEFAULT_CACHE_CAPACITY)
    }

    pub fn with_capacity(table: &'a CostTable, capacity: usize) -> Self {
        Self {
            table,
            cache: SpreadCache::new(capacity),
        }
    }

    pub fn table(&self) -> &'a CostTable {
        self.table
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Every non-increasing spread of `n` valid costs summing to `total`,
    /// with no element above the table's largest cost
    pub fn spreads_of(&mut self, n: usize, total: Cost) -> Vec<CostSpread> {
        let Some(max_cost) = self.table.max_cost() else {
            return if n == 0 && total == 0 {
                vec![CostSpread::empty()]
            } else {
                Vec::new()
            };
        };
        let spreads = self.enumerate(n, total, max_cost);
        let stats = self.cache.stats();
        tracing::debug!(
            n,
            total,
            found = spreads.len(),
            hits = stats.hits,
            misses = stats.misses,
            evictions = stats.evictions,
            "enumerated cost spreads"
        );
        spreads
    }

    /// Every non-increasing spread of `n` valid costs summing to `total`
    /// whose first element is at most `max_cost`
    pub fn enumerate(&mut self, n: usize, total: Cost, max_cost: Cost) -> Vec<CostSpread> {
        if n == 0 {
            return if total == 0 {
                vec![CostSpread::empty()]
            } else {
                Vec::new()
            };
        }
        if total == 0 {
            return if self.table.contains(0) && max_cost >= 0 {
                vec![CostSpread::repeated(0, n)]
            } else {
                Vec::new()
            };
        }
        if total < 0 {
            return Vec::new();
        }

        let key = SpreadKey::new(n, total, max_cost);
        if let Some(spreads) = self.cache.get(&key) {
            return spreads;
        }

        let table = self.table;
        let mut spreads = Vec::new();
        for &cost in table.costs_descending() {
            if cost > total || cost > max_cost || !Self::can_reach(n, total, cost) {
                continue;
            }
            for tail in self.enumerate(n - 1, total - cost, cost) {
                spreads.push(tail.with_head(cost));
            }
        }

        self.cache.insert(key, spreads.clone());
        spreads
    }

    /// Whether `n` slots each at most `cost` can sum to `total`
    fn can_reach(n: usize, total: Cost, cost: Cost) -> bool {
        let ceiling = i64::try_from(n).unwrap_or(i64::MAX).saturating_mul(i64::from(cost));
        i64::from(total) <= ceiling
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::cost_table::CostValuePair;

    fn standard_spreads(n: usize, total: Cost) -> Vec<CostSpread> {
        let table = CostTable::standard();
        let mut engine = SpreadEngine::new(&table);
        engine.spreads_of(n, total)
    }

    #[test]
    fn test_zero_slots() {
        assert_eq!(standard_spreads(0, 0), vec![CostSpread::empty()]);
        assert!(standard_spreads(0, 3).is_empty());
        assert!(standard_spreads(0, -3).is_empty());
    }

    #[test]
    fn test_zero_total_is_all_zero_costs() {
        assert_eq!(standard_spreads(6, 0), vec![CostSpread::repeated(0, 6)]);
    }

    #[test]
    fn test_negative_total_is_empty() {
        assert!(standard_spreads(6, -1).is_empty());
    }

    #[test]
    fn test_single_slot() {
        assert_eq!(standard_spreads(1, 7), vec![CostSpread::new(vec![7])]);
        assert!(standard_spreads(1, 6).is_empty());
        assert!(standard_spreads(1, 10).is_empty());
    }

    #[test]
    fn test_two_slots_of_ten() {
        let spreads = standard_spreads(2, 10);
        let costs: Vec<&[Cost]> = spreads.iter().map(|s| s.costs()).collect();
        assert_eq!(costs, vec![&[9, 1][..], &[7, 3][..], &[5, 5][..]]);
    }

    #[test]
    fn test_max_cost_caps_head() {
        let table = CostTable::standard();
        let mut engine = SpreadEngine::new(&table);
        let spreads = engine.enumerate(2, 10, 5);
        assert_eq!(spreads, vec![CostSpread::new(vec![5, 5])]);
    }

    #[test]
    fn test_upper_bound_is_six_nines() {
        assert_eq!(standard_spreads(6, 54), vec![CostSpread::repeated(9, 6)]);
        assert!(standard_spreads(6, 55).is_empty());
        assert!(standard_spreads(6, 53).is_empty());
    }

    #[test]
    fn test_memoized_results_match() {
        let table = CostTable::standard();
        let mut engine = SpreadEngine::new(&table);
        let first = engine.spreads_of(6, 27);
        let misses = engine.cache_stats().misses;
        let second = engine.spreads_of(6, 27);

        assert_eq!(first, second);
        assert_eq!(engine.cache_stats().misses, misses);
        assert!(engine.cache_stats().hits > 0);
    }

    #[test]
    fn test_tiny_cache_gives_same_answer() {
        let table = CostTable::standard();
        let mut roomy = SpreadEngine::new(&table);
        let mut cramped = SpreadEngine::with_capacity(&table, 1);
        assert_eq!(roomy.spreads_of(6, 27), cramped.spreads_of(6, 27));
    }

    #[test]
    fn test_table_without_zero_cost() {
        let table = CostTable::new([CostValuePair::new(2, 10), CostValuePair::new(3, 11)]);
        let mut engine = SpreadEngine::new(&table);
        assert!(engine.spreads_of(3, 0).is_empty());
        assert!(engine.spreads_of(3, 5).is_empty());
        assert_eq!(engine.spreads_of(3, 7), vec![CostSpread::new(vec![3, 2, 2])]);
    }

    #[test]
    fn test_empty_table() {
        let table = CostTable::new(Vec::<CostValuePair>::new());
        let mut engine = SpreadEngine::new(&table);
        assert_eq!(engine.spreads_of(0, 0), vec![CostSpread::empty()]);
        assert!(engine.spreads_of(2, 0).is_empty());
    }
}
