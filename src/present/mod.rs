//! Console presentation of a spread collection
//!
//! Every mode writes to a caller-supplied sink and draws randomness from a
//! caller-supplied generator, so runs can be replayed from a seed.

pub mod choose;
pub mod format;
pub mod generate;
pub mod list;

pub use choose::{
    assign_scores, choose_scores, offer_spreads, read_selection, AbilityAssignment, PromptState,
};
pub use generate::{draw_spreads, generate_arrays, generate_scores};
pub use list::list_arrays;
