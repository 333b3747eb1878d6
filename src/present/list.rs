//! List mode: every array in the collection

use crate::core::error::Result;
use crate::present::format::score_line;
use crate::rules::cost_table::CostTable;
use crate::spread::collection::SpreadCollection;
use std::io::Write;

/// Print each spread as scores, one per line, in collection order
pub fn list_arrays<W: Write>(
    out: &mut W,
    table: &CostTable,
    collection: &SpreadCollection,
) -> Result<()> {
    for spread in collection {
        let array = table.scores_for(spread);
        writeln!(out, "{}", score_line(array.scores()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CostSpread;

    #[test]
    fn test_lists_in_collection_order() {
        let table = CostTable::standard();
        let collection = SpreadCollection::from_spreads(vec![
            CostSpread::new(vec![9, 9, 9, 0, 0, 0]),
            CostSpread::new(vec![7, 5, 5, 5, 5, 0]),
        ]);

        let mut out = Vec::new();
        list_arrays(&mut out, &table, &collection).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "15 15 15  8  8  8\n14 13 13 13 13  8\n");
    }
}
