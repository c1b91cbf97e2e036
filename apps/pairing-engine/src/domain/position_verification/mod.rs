//! Position Verification Bounded Context
//!
//! Checks what the trading runtime actually holds after execution:
//! - Structure of the combined two-leg position (legs, sides, sizes)
//! - The accounting model the runtime applied to the group
//! - End-of-run invariants (nothing left open, expected fill count)

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{RunInvariantReport, RunInvariantViolation, VerificationFailure, VerificationReport};
pub use services::{EndOfRunCheck, PositionVerifier, ROUND_TRIP_FILLED_ORDERS};
pub use value_objects::{AccountingModelTag, ExpectedShape, PositionGroup, PositionLeg};
