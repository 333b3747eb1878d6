//! Run configuration with documented constants
//!
//! Defaults for the command line live here, along with the validation
//! that turns raw flag values into a single run mode.

use crate::core::error::{PointBuyError, Result};

/// Default point budget for six abilities (fifth edition rules)
pub const DEFAULT_POINTS: i64 = 27;

/// Default number of arrays offered in choose mode
pub const DEFAULT_NUM_CHOICES: usize = 3;

/// Default capacity of the spread memo cache
///
/// The standard table never produces more than 84 distinct
/// `(n, total, max_cost)` keys for a single budget, so 128 holds a
/// whole run without evicting.
pub const DEFAULT_CACHE_CAPACITY: usize = 128;

/// Tunable settings shared by the engine and the presentation layer
#[derive(Debug, Clone)]
pub struct PointBuyConfig {
    /// Point budget used when `--points` is omitted
    pub default_points: i64,

    /// Arrays offered when choose mode runs without `--choices`
    pub default_choices: usize,

    /// Maximum number of memoized `(n, total, max_cost)` results
    ///
    /// When full, the least recently used entry is evicted.
    pub cache_capacity: usize,
}

impl Default for PointBuyConfig {
    fn default() -> Self {
        Self {
            default_points: DEFAULT_POINTS,
            default_choices: DEFAULT_NUM_CHOICES,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Which presentation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print every valid array
    List,
    /// Print `count` random arrays under ability labels
    Generate { count: usize },
    /// Offer `choices` arrays and prompt for one
    Choose { choices: usize },
}

/// Validated settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub points: i32,
    pub mode: Mode,
}

impl RunConfig {
    /// Validate raw flag values before any computation happens
    pub fn validate(
        config: &PointBuyConfig,
        points: Option<i64>,
        choices: Option<i64>,
        generate: Option<i64>,
        list: bool,
    ) -> Result<Self> {
        let modes = [choices.is_some(), generate.is_some(), list]
            .iter()
            .filter(|set| **set)
            .count();
        if modes > 1 {
            return Err(PointBuyError::ConflictingModes);
        }

        let points = points.unwrap_or(config.default_points);
        if points < 0 {
            return Err(PointBuyError::InvalidConfig(
                "invalid point pool size (must be nonnegative)".into(),
            ));
        }
        let points = i32::try_from(points).map_err(|_| {
            PointBuyError::InvalidConfig(format!("point pool size {} is too large", points))
        })?;

        let mode = if list {
            Mode::List
        } else if let Some(count) = generate {
            let count = usize::try_from(count).map_err(|_| {
                PointBuyError::InvalidConfig(
                    "invalid number of arrays to generate (must be nonnegative)".into(),
                )
            })?;
            Mode::Generate { count }
        } else if let Some(choices) = choices {
            if choices <= 0 {
                return Err(PointBuyError::InvalidConfig(
                    "invalid number of choices (must be positive)".into(),
                ));
            }
            let choices = usize::try_from(choices).map_err(|_| {
                PointBuyError::InvalidConfig(format!("number of choices {} is too large", choices))
            })?;
            Mode::Choose { choices }
        } else {
            Mode::Choose {
                choices: config.default_choices,
            }
        };

        Ok(Self { points, mode })
    }
}
