//! Metrics for pairing and verification.
//!
//! Recorded through the `metrics` facade; the host process decides whether
//! and where to export them.
//!
//! # Metrics
//!
//! - `pairing_selections_total{shape, outcome}` - selector runs by outcome
//! - `pairing_orders_submitted_total{strategy}` - strategy orders sent
//! - `pairing_verification_failures_total{code}` - failed verification checks
//! - `pairing_run_invariant_violations_total{code}` - end-of-run violations

use metrics::counter;

use crate::domain::position_verification::{RunInvariantReport, VerificationReport};
use crate::domain::strategy_selection::{StrategyOrder, StrategyShape};

/// Record one selector run.
pub fn record_selection(shape: StrategyShape, found: bool) {
    let outcome = if found { "found" } else { "none" };
    counter!(
        "pairing_selections_total",
        "shape" => shape.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

/// Record a submitted strategy order.
pub fn record_order_submission(order: &StrategyOrder) {
    counter!("pairing_orders_submitted_total", "strategy" => order.name()).increment(1);
}

/// Record each failure of a verification report.
pub fn record_verification_failures(report: &VerificationReport) {
    for failure in report.failures() {
        counter!("pairing_verification_failures_total", "code" => failure.code()).increment(1);
    }
}

/// Record each violation of an end-of-run report.
pub fn record_run_invariant_violations(report: &RunInvariantReport) {
    for violation in report.violations() {
        counter!("pairing_run_invariant_violations_total", "code" => violation.code())
            .increment(1);
    }
}
