//! Strategy Selection Value Objects

mod contract_pair;
mod position_side;
mod strategy_order;
mod strategy_shape;

pub use contract_pair::ContractPair;
pub use position_side::PositionSide;
pub use strategy_order::{LegRequest, StrategyOrder};
pub use strategy_shape::{StranglePreference, StrategyShape};
