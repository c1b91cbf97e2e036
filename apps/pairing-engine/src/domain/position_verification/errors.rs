//! Position Verification Errors
//!
//! Verification never raises: every check yields a structured failure and
//! the caller decides whether to halt.

use serde::Serialize;
use thiserror::Error;

use super::AccountingModelTag;
use crate::domain::option_chain::OptionRight;

/// One failed structural check on a position group.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationFailure {
    /// Legs were not grouped under the combined strategy model.
    #[error("Expected position group buying power model: {expected}. Actual: {actual}")]
    MismatchedAccountingModel {
        /// Required tag.
        expected: AccountingModelTag,
        /// Tag applied by the runtime.
        actual: AccountingModelTag,
    },

    /// Group does not hold the expected number of legs.
    #[error("Expected position group to have {expected} positions. Actual: {actual}")]
    UnexpectedLegCount {
        /// Required leg count.
        expected: usize,
        /// Legs present.
        actual: usize,
    },

    /// No leg carries the given right.
    #[error("Expected position group to have a {right} position")]
    MissingLeg {
        /// The absent side.
        right: OptionRight,
    },

    /// More than one leg carries the given right.
    #[error("Expected position group to have one {right} position. Actual: {count}")]
    DuplicateLeg {
        /// The repeated side.
        right: OptionRight,
        /// Legs carrying it.
        count: usize,
    },

    /// A leg holds the wrong signed quantity.
    #[error("Expected {right} position quantity to be {expected}. Actual: {actual}")]
    QuantityMismatch {
        /// The side checked.
        right: OptionRight,
        /// Required signed quantity.
        expected: i64,
        /// Held signed quantity.
        actual: i64,
    },
}

impl VerificationFailure {
    /// Stable failure code for metrics and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MismatchedAccountingModel { .. } => "MISMATCHED_ACCOUNTING_MODEL",
            Self::UnexpectedLegCount { .. } => "UNEXPECTED_LEG_COUNT",
            Self::MissingLeg { .. } => "MISSING_LEG",
            Self::DuplicateLeg { .. } => "DUPLICATE_LEG",
            Self::QuantityMismatch { .. } => "QUANTITY_MISMATCH",
        }
    }
}

/// Every failed check of one verification, in check order. Never empty.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("Position verification failed: {}", join(.failures))]
pub struct VerificationReport {
    failures: Vec<VerificationFailure>,
}

#[allow(clippy::len_without_is_empty)] // never empty by construction
impl VerificationReport {
    /// Wrap collected failures; `None` when nothing failed.
    #[must_use]
    pub fn from_failures(failures: Vec<VerificationFailure>) -> Option<Self> {
        if failures.is_empty() {
            None
        } else {
            Some(Self { failures })
        }
    }

    /// Get the failures.
    #[must_use]
    pub fn failures(&self) -> &[VerificationFailure] {
        &self.failures
    }

    /// Number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }
}

/// A violated end-of-run invariant.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunInvariantViolation {
    /// Holdings remain after the run.
    #[error("Expected no holdings at end of run. Open legs: {open_legs}")]
    ResidualPosition {
        /// Legs still holding a non-zero quantity.
        open_legs: usize,
    },

    /// Wrong number of filled orders across the run.
    #[error("Expected {expected} orders to have been submitted and filled. Actual: {actual}")]
    OrderCountMismatch {
        /// Required filled order count.
        expected: usize,
        /// Filled orders reported by the runtime.
        actual: usize,
    },
}

impl RunInvariantViolation {
    /// Stable violation code for metrics and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ResidualPosition { .. } => "RESIDUAL_POSITION",
            Self::OrderCountMismatch { .. } => "ORDER_COUNT_MISMATCH",
        }
    }
}

/// Every violated end-of-run invariant. Never empty.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("End-of-run check failed: {}", join(.violations))]
pub struct RunInvariantReport {
    violations: Vec<RunInvariantViolation>,
}

impl RunInvariantReport {
    /// Wrap collected violations; `None` when nothing was violated.
    #[must_use]
    pub fn from_violations(violations: Vec<RunInvariantViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self { violations })
        }
    }

    /// Get the violations.
    #[must_use]
    pub fn violations(&self) -> &[RunInvariantViolation] {
        &self.violations
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display() {
        let err = VerificationFailure::QuantityMismatch {
            right: OptionRight::Put,
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected PUT position quantity to be 3. Actual: 2"
        );
        assert_eq!(err.code(), "QUANTITY_MISMATCH");

        let err = VerificationFailure::MissingLeg {
            right: OptionRight::Call,
        };
        assert_eq!(
            err.to_string(),
            "Expected position group to have a CALL position"
        );
    }

    #[test]
    fn report_requires_failures() {
        assert!(VerificationReport::from_failures(vec![]).is_none());

        let report = VerificationReport::from_failures(vec![
            VerificationFailure::UnexpectedLegCount {
                expected: 2,
                actual: 3,
            },
            VerificationFailure::MissingLeg {
                right: OptionRight::Put,
            },
        ])
        .unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(
            report.to_string(),
            "Position verification failed: Expected position group to have 2 positions. \
             Actual: 3; Expected position group to have a PUT position"
        );
    }

    #[test]
    fn duplicate_leg_display() {
        let err = VerificationFailure::DuplicateLeg {
            right: OptionRight::Call,
            count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Expected position group to have one CALL position. Actual: 2"
        );
        assert_eq!(err.code(), "DUPLICATE_LEG");
    }

    #[test]
    fn failure_serializes_with_code() {
        let failure = VerificationFailure::UnexpectedLegCount {
            expected: 2,
            actual: 1,
        };
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["code"], "UNEXPECTED_LEG_COUNT");
        assert_eq!(json["actual"], 1);
    }

    #[test]
    fn invariant_report_display() {
        assert!(RunInvariantReport::from_violations(vec![]).is_none());

        let report = RunInvariantReport::from_violations(vec![
            RunInvariantViolation::ResidualPosition { open_legs: 2 },
        ])
        .unwrap();
        assert_eq!(report.violations()[0].code(), "RESIDUAL_POSITION");
        assert_eq!(
            report.to_string(),
            "End-of-run check failed: Expected no holdings at end of run. Open legs: 2"
        );
    }
}
