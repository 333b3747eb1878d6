//! Core type definitions used throughout the codebase

use std::fmt;

/// Purchase cost of a single ability score
///
/// Signed so that budgets below zero can flow through the engine
/// and simply produce no results.
pub type Cost = i32;

/// Ability score value (8..=15 for the standard table)
pub type Score = i32;

/// Assignment of costs to ability slots, kept in canonical
/// non-increasing order so permutations of one multiset collapse
/// to a single spread.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CostSpread(Vec<Cost>);

impl CostSpread {
    pub fn new(costs: Vec<Cost>) -> Self {
        Self(costs)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// A spread of `n` copies of `cost`
    pub fn repeated(cost: Cost, n: usize) -> Self {
        Self(vec![cost; n])
    }

    /// Prepend `head`, keeping the remaining slots in order
    pub fn with_head(&self, head: Cost) -> Self {
        let mut costs = Vec::with_capacity(self.0.len() + 1);
        costs.push(head);
        costs.extend_from_slice(&self.0);
        Self(costs)
    }

    pub fn costs(&self) -> &[Cost] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all slot costs
    pub fn total(&self) -> Cost {
        self.0.iter().sum()
    }

    pub fn is_non_increasing(&self) -> bool {
        self.0.windows(2).all(|w| w[0] >= w[1])
    }

    /// Fill trailing slots with `cost` until the spread has `n` slots
    pub fn padded(mut self, n: usize, cost: Cost) -> Self {
        if self.0.len() < n {
            self.0.resize(n, cost);
        }
        self
    }
}

impl fmt::Display for CostSpread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|c| c.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// Ability scores for each slot, in presentation order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityArray(pub Vec<Score>);

impl AbilityArray {
    pub fn scores(&self) -> &[Score] {
        &self.0
    }

    pub fn scores_mut(&mut self) -> &mut [Score] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
