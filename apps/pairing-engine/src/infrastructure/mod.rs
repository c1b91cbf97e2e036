//! Infrastructure Layer
//!
//! Adapters implementing the application ports.

pub mod paper;

pub use paper::PaperTradingRuntime;
