//! Greedy best-effort spread for budgets no exact spread can hit

use crate::core::types::{Cost, CostSpread};
use crate::rules::cost_table::CostTable;

/// Largest-cost-first spread of at most `n` costs summing to at most `total`
///
/// Each step takes the largest cost that still fits the remaining budget.
/// Stops early once the budget is spent or nothing fits, so the result
/// can be shorter than `n`.
pub fn greedy_spread(table: &CostTable, n: usize, total: Cost) -> CostSpread {
    let mut costs = Vec::with_capacity(n);
    let mut remaining = total;

    while costs.len() < n && remaining > 0 {
        let Some(cost) = table
            .costs_descending()
            .iter()
            .copied()
            .find(|&cost| cost <= remaining)
        else {
            break;
        };
        costs.push(cost);
        remaining -= cost;
    }

    CostSpread::new(costs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::cost_table::CostValuePair;

    #[test]
    fn test_greedy_fills_with_largest() {
        let table = CostTable::standard();
        let spread = greedy_spread(&table, 6, 53);
        assert_eq!(spread.costs(), &[9, 9, 9, 9, 9, 7]);
        assert_eq!(spread.total(), 52);
    }

    #[test]
    fn test_greedy_caps_at_slot_count() {
        let table = CostTable::standard();
        let spread = greedy_spread(&table, 6, 100);
        assert_eq!(spread, CostSpread::repeated(9, 6));
    }

    #[test]
    fn test_negative_budget_is_empty() {
        let table = CostTable::standard();
        assert!(greedy_spread(&table, 6, -1).is_empty());
    }

    #[test]
    fn test_stops_when_budget_spent() {
        let table = CostTable::standard();
        assert_eq!(greedy_spread(&table, 6, 9).costs(), &[9]);
    }

    #[test]
    fn test_stops_when_nothing_fits() {
        let table = CostTable::new([CostValuePair::new(3, 11), CostValuePair::new(5, 13)]);
        let spread = greedy_spread(&table, 4, 7);
        assert_eq!(spread.costs(), &[5]);
    }
}
