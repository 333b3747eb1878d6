//! The set of spreads one run draws its arrays from

use crate::core::types::{Cost, CostSpread};
use crate::spread::engine::SpreadEngine;
use crate::spread::fallback::greedy_spread;

/// Distinct spreads for one `(n, total)`, computed once and read-only after
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadCollection {
    spreads: Vec<CostSpread>,
    exact: bool,
}

impl SpreadCollection {
    /// Exact spreads of `n` costs summing to `total`, or the greedy
    /// fallback as a single spread when none exist
    ///
    /// A short fallback spread is padded with zero costs so every member has
    /// exactly `n` slots. Tables without a zero cost keep the short spread.
    pub fn resolve(engine: &mut SpreadEngine<'_>, n: usize, total: Cost) -> Self {
        let spreads = engine.spreads_of(n, total);
        if !spreads.is_empty() {
            return Self {
                spreads,
                exact: true,
            };
        }

        let table = engine.table();
        let mut fallback = greedy_spread(table, n, total);
        tracing::debug!(n, total, spread = %fallback, "no exact spread, using greedy fallback");
        // Zero-cost slots keep the spread within budget; any other filler would not
        if fallback.len() < n && table.contains(0) {
            fallback = fallback.padded(n, 0);
        }

        Self {
            spreads: vec![fallback],
            exact: false,
        }
    }

    pub fn from_spreads(spreads: Vec<CostSpread>) -> Self {
        Self {
            spreads,
            exact: true,
        }
    }

    pub fn spreads(&self) -> &[CostSpread] {
        &self.spreads
    }

    /// False when the collection holds the greedy fallback
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CostSpread> {
        self.spreads.iter()
    }
}

impl<'c> IntoIterator for &'c SpreadCollection {
    type Item = &'c CostSpread;
    type IntoIter = std::slice::Iter<'c, CostSpread>;

    fn into_iter(self) -> Self::IntoIter {
        self.spreads.iter()
    }
}
