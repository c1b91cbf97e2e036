//! Paper trading runtime.

mod paper_runtime;

pub use paper_runtime::PaperTradingRuntime;
