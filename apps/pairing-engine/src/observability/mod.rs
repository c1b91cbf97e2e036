//! Observability for the pairing engine.
//!
//! Logging goes through `tracing` (see [`crate::telemetry`]); counters go
//! through the `metrics` facade.

pub mod metrics;

pub use self::metrics::{
    record_order_submission, record_run_invariant_violations, record_selection,
    record_verification_failures,
};
