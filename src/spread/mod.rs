//! Cost spread search
//!
//! The engine enumerates every canonical spread for an exact budget;
//! the fallback covers budgets with no exact answer.

pub mod cache;
pub mod collection;
pub mod engine;
pub mod fallback;

pub use cache::{CacheStats, SpreadCache, SpreadKey};
pub use collection::SpreadCollection;
pub use engine::SpreadEngine;
pub use fallback::greedy_spread;
