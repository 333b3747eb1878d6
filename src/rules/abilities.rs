//! Ability labels and the rule set they form with a cost table

use crate::rules::cost_table::CostTable;

/// The six abilities, in display order
pub const ABILITIES: [&str; 6] = ["STR", "DEX", "CON", "INT", "WIS", "CHA"];

/// Cost table plus the ordered ability slots it is spent across
///
/// Built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub table: CostTable,
    pub abilities: Vec<&'static str>,
}

impl RuleSet {
    pub fn new(table: CostTable, abilities: Vec<&'static str>) -> Self {
        Self { table, abilities }
    }

    /// Fifth edition table across the six standard abilities
    pub fn standard() -> Self {
        Self::new(CostTable::standard(), ABILITIES.to_vec())
    }

    /// Number of ability slots
    pub fn slot_count(&self) -> usize {
        self.abilities.len()
    }
}
