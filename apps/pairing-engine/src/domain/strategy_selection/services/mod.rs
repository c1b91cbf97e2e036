//! Strategy Selection Services

mod contract_selector;
mod ranking;

pub use contract_selector::ContractSelector;
