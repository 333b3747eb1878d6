//! Point-buy rules: the cost table and the ability slots

pub mod abilities;
pub mod cost_table;

pub use abilities::{RuleSet, ABILITIES};
pub use cost_table::{CostTable, CostValuePair, STANDARD_COSTS};
