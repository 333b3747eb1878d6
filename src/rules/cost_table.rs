//! Cost table mapping purchase costs to ability scores

use crate::core::types::{AbilityArray, Cost, CostSpread, Score};
use std::collections::BTreeMap;

/// One entry of the point-buy table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostValuePair {
    pub cost: Cost,
    pub score: Score,
}

impl CostValuePair {
    pub const fn new(cost: Cost, score: Score) -> Self {
        Self { cost, score }
    }
}

/// Standard fifth edition point-buy costs
pub const STANDARD_COSTS: [CostValuePair; 8] = [
    CostValuePair::new(0, 8),
    CostValuePair::new(1, 9),
    CostValuePair::new(2, 10),
    CostValuePair::new(3, 11),
    CostValuePair::new(4, 12),
    CostValuePair::new(5, 13),
    CostValuePair::new(7, 14),
    CostValuePair::new(9, 15),
];

/// Immutable cost -> score mapping plus the costs in descending order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    scores: BTreeMap<Cost, Score>,
    /// Valid costs, largest first
    descending: Vec<Cost>,
}

impl CostTable {
    /// Build a table from pairs; a repeated cost keeps its last score
    pub fn new(pairs: impl IntoIterator<Item = CostValuePair>) -> Self {
        let scores: BTreeMap<Cost, Score> =
            pairs.into_iter().map(|p| (p.cost, p.score)).collect();
        let descending = scores.keys().rev().copied().collect();
        Self { scores, descending }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_COSTS)
    }

    /// Valid costs, largest first
    pub fn costs_descending(&self) -> &[Cost] {
        &self.descending
    }

    pub fn max_cost(&self) -> Option<Cost> {
        self.descending.first().copied()
    }

    pub fn min_cost(&self) -> Option<Cost> {
        self.descending.last().copied()
    }

    pub fn contains(&self, cost: Cost) -> bool {
        self.scores.contains_key(&cost)
    }

    pub fn score_of(&self, cost: Cost) -> Option<Score> {
        self.scores.get(&cost).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn pairs(&self) -> impl Iterator<Item = CostValuePair> + '_ {
        self.scores
            .iter()
            .map(|(&cost, &score)| CostValuePair::new(cost, score))
    }

    /// Translate every cost of a spread into its score, or `None` if any
    /// cost is missing from the table
    pub fn try_scores_for(&self, spread: &CostSpread) -> Option<AbilityArray> {
        spread
            .costs()
            .iter()
            .map(|&cost| self.score_of(cost))
            .collect::<Option<Vec<_>>>()
            .map(AbilityArray)
    }

    /// Translate every cost of a spread into its score
    ///
    /// Costs missing from the table are skipped with a warning, so the array
    /// can come back shorter than the spread.
    pub fn scores_for(&self, spread: &CostSpread) -> AbilityArray {
        AbilityArray(
            spread
                .costs()
                .iter()
                .filter_map(|&cost| {
                    let score = self.score_of(cost);
                    if score.is_none() {
                        tracing::warn!(cost, %spread, "cost has no score in table, skipping slot");
                    }
                    score
                })
                .collect(),
        )
    }
}
