//! Option Chain Value Objects

mod chain_filter;
mod chain_snapshot;
mod option_contract;

pub use chain_filter::ChainFilter;
pub use chain_snapshot::ChainSnapshot;
pub use option_contract::{OptionContract, OptionRight};
