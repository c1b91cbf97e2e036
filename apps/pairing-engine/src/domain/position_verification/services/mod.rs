//! Position Verification Services

mod end_of_run;
mod position_verifier;

pub use end_of_run::{EndOfRunCheck, ROUND_TRIP_FILLED_ORDERS};
pub use position_verifier::PositionVerifier;
