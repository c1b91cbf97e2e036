//! Application Ports (Driven)
//!
//! Ports define how the application uses external systems.

mod trading_runtime_port;

pub use trading_runtime_port::{OrderAck, RuntimeError, TradingRuntimePort};
