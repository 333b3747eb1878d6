//! Choose mode: pick one of several offered arrays, then assign it
//!
//! The prompt is a small state machine. `AwaitingInput` reads a line;
//! unparsable input moves to `InvalidFormat`, a number outside
//! `1..=count` to `OutOfRange`, both of which report an error and return
//! to `AwaitingInput`. `ValidSelection` is terminal.

use crate::core::error::{PointBuyError, Result};
use crate::core::types::{AbilityArray, CostSpread, Score};
use crate::present::format::{assignment_line, menu_line};
use crate::rules::abilities::RuleSet;
use crate::rules::cost_table::CostTable;
use crate::spread::collection::SpreadCollection;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::{BufRead, Write};

/// Prompt loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitingInput,
    InvalidFormat,
    OutOfRange,
    /// Zero-based index of the chosen option
    ValidSelection(usize),
}

impl PromptState {
    /// Classify one line of input against a menu of `count` options
    pub fn from_input(input: &str, count: usize) -> Self {
        let Ok(number) = input.trim().parse::<i64>() else {
            return Self::InvalidFormat;
        };
        match usize::try_from(number) {
            Ok(number) if (1..=count).contains(&number) => Self::ValidSelection(number - 1),
            _ => Self::OutOfRange,
        }
    }
}

/// Final ability -> score assignment, in label order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityAssignment {
    pub entries: Vec<(&'static str, Score)>,
}

impl AbilityAssignment {
    pub fn score_of(&self, label: &str) -> Option<Score> {
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, score)| *score)
    }

    pub fn scores(&self) -> Vec<Score> {
        self.entries.iter().map(|(_, score)| *score).collect()
    }
}

/// Up to `choices` distinct spreads, highest first
pub fn offer_spreads<R: Rng + ?Sized>(
    collection: &SpreadCollection,
    choices: usize,
    rng: &mut R,
) -> Vec<CostSpread> {
    let count = choices.min(collection.len());
    let mut offered: Vec<CostSpread> = collection
        .spreads()
        .choose_multiple(rng, count)
        .cloned()
        .collect();
    offered.sort_by(|a, b| b.cmp(a));
    offered
}

/// Prompt until a valid 1-based option is entered; returns it zero-based
pub fn read_selection<B: BufRead, W: Write>(
    input: &mut B,
    out: &mut W,
    count: usize,
) -> Result<usize> {
    let mut state = PromptState::AwaitingInput;
    loop {
        match state {
            PromptState::AwaitingInput => {
                write!(out, "> ")?;
                out.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Err(PointBuyError::InputClosed);
                }
                state = PromptState::from_input(&line, count);
            }
            PromptState::InvalidFormat | PromptState::OutOfRange => {
                tracing::debug!(?state, "rejected selection");
                writeln!(out, "Error: expected a number between 1 and {}", count)?;
                state = PromptState::AwaitingInput;
            }
            PromptState::ValidSelection(index) => return Ok(index),
        }
    }
}

/// Shuffle an array's scores and pair them with the labels in order
pub fn assign_scores<R: Rng + ?Sized>(
    labels: &[&'static str],
    mut array: AbilityArray,
    rng: &mut R,
) -> AbilityAssignment {
    array.scores_mut().shuffle(rng);
    AbilityAssignment {
        entries: labels
            .iter()
            .copied()
            .zip(array.scores().iter().copied())
            .collect(),
    }
}

fn offered_arrays(table: &CostTable, offered: &[CostSpread]) -> Vec<AbilityArray> {
    offered.iter().map(|spread| table.scores_for(spread)).collect()
}

/// Offer up to `choices` arrays, prompt for one, and print its random assignment
pub fn choose_scores<B: BufRead, W: Write, R: Rng + ?Sized>(
    input: &mut B,
    out: &mut W,
    rules: &RuleSet,
    collection: &SpreadCollection,
    choices: usize,
    rng: &mut R,
) -> Result<AbilityAssignment> {
    let offered = offer_spreads(collection, choices, rng);
    let arrays = offered_arrays(&rules.table, &offered);
    if arrays.is_empty() {
        return Err(PointBuyError::InvalidConfig(
            "no arrays available to choose from".into(),
        ));
    }

    writeln!(out, "\nChoose an array:\n")?;
    for (i, array) in arrays.iter().enumerate() {
        writeln!(out, "{}", menu_line(i + 1, array.scores()))?;
    }
    writeln!(out)?;

    let selection = read_selection(input, out, arrays.len())?;
    tracing::debug!(selection = selection + 1, spread = %offered[selection], "array selected");

    let assignment = assign_scores(&rules.abilities, arrays[selection].clone(), rng);

    writeln!(out, "\nAbility Scores:\n")?;
    for (label, score) in &assignment.entries {
        writeln!(out, "{}", assignment_line(label, *score))?;
    }
    writeln!(out)?;

    Ok(assignment)
}
