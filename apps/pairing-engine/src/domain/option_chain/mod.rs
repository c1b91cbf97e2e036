//! Option Chain Bounded Context
//!
//! Read-only market inputs handed over by the trading runtime once per cycle:
//! - Option contracts identified by `(right, strike, expiration)`
//! - Chain snapshots for a single underlying with its current price
//! - The strike/expiry window applied before selection

pub mod errors;
pub mod value_objects;

pub use errors::ChainError;
pub use value_objects::{ChainFilter, ChainSnapshot, OptionContract, OptionRight};
