//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! Everything here is synchronous and pure: inputs in, structured results out.
//!
//! # Bounded Contexts
//!
//! - [`option_chain`]: Contracts and chain snapshots supplied by the runtime
//! - [`strategy_selection`]: Straddle/strangle pairing and strategy orders
//! - [`position_verification`]: Post-execution structure and end-of-run checks

pub mod option_chain;
pub mod position_verification;
pub mod shared;
pub mod strategy_selection;
