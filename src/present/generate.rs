//! Generate mode: random arrays in random ability order

use crate::core::error::Result;
use crate::core::types::{AbilityArray, CostSpread};
use crate::present::format::{label_header, score_row};
use crate::rules::abilities::RuleSet;
use crate::rules::cost_table::CostTable;
use crate::spread::collection::SpreadCollection;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use std::io::Write;

/// Draw `count` spreads without replacement
///
/// When `count` exceeds the collection, the collection is repeated until
/// it covers `count` and the draw is made from the repeated pool, so the
/// same spread can then come up more than once.
pub fn draw_spreads<R: Rng + ?Sized>(
    collection: &SpreadCollection,
    count: usize,
    rng: &mut R,
) -> Vec<CostSpread> {
    if collection.is_empty() || count == 0 {
        return Vec::new();
    }

    let len = collection.len();
    let copies = count.div_ceil(len);
    if copies > 1 {
        tracing::debug!(count, available = len, copies, "repeating spreads to cover draw");
    }

    // Index `i` of the repeated pool is spread `i % len`; sampling indices
    // avoids materializing the pool
    let spreads = collection.spreads();
    index::sample(rng, len.saturating_mul(copies), count)
        .into_iter()
        .map(|i| spreads[i % len].clone())
        .collect()
}

/// `count` random arrays, each with its scores shuffled across slots
pub fn generate_arrays<R: Rng + ?Sized>(
    table: &CostTable,
    collection: &SpreadCollection,
    count: usize,
    rng: &mut R,
) -> Vec<AbilityArray> {
    draw_spreads(collection, count, rng)
        .iter()
        .map(|spread| {
            let mut array = table.scores_for(spread);
            array.scores_mut().shuffle(rng);
            array
        })
        .collect()
}

/// Print a label header and `count` random arrays beneath it
pub fn generate_scores<W: Write, R: Rng + ?Sized>(
    out: &mut W,
    rules: &RuleSet,
    collection: &SpreadCollection,
    count: usize,
    rng: &mut R,
) -> Result<Vec<AbilityArray>> {
    let arrays = generate_arrays(&rules.table, collection, count, rng);

    writeln!(out, "{}", label_header(&rules.abilities))?;
    for array in &arrays {
        writeln!(out, "{}", score_row(array.scores()))?;
    }
    Ok(arrays)
}
