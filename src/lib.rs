//! Point Buy - ability score arrays with a constant point-buy cost

pub mod core;
pub mod present;
pub mod rules;
pub mod spread;
