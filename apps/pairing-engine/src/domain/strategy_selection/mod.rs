//! Strategy Selection Bounded Context
//!
//! Picks the call/put pair for a two-leg strategy from a chain snapshot and
//! turns it into an order definition:
//! - Straddle pairs (same strike, same expiry)
//! - Strangle pairs (call strike above put strike, same expiry)
//! - Long strategies and their closing inverses

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::StrategyError;
pub use services::ContractSelector;
pub use value_objects::{
    ContractPair, LegRequest, PositionSide, StranglePreference, StrategyOrder, StrategyShape,
};
