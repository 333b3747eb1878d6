pub mod config;
pub mod error;
pub mod types;

pub use config::{Mode, PointBuyConfig, RunConfig};
pub use error::{PointBuyError, Result};
pub use types::{AbilityArray, Cost, CostSpread, Score};
