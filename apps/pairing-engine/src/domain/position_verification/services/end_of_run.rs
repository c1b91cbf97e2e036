//! End-of-run invariant check.

use crate::domain::position_verification::errors::{RunInvariantReport, RunInvariantViolation};
use crate::domain::position_verification::value_objects::PositionGroup;

/// Two legs to open plus two legs to close.
pub const ROUND_TRIP_FILLED_ORDERS: usize = 4;

/// Asserts a scenario left nothing open and filled the expected order count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfRunCheck {
    expected_filled_orders: usize,
}

impl Default for EndOfRunCheck {
    fn default() -> Self {
        Self::new(ROUND_TRIP_FILLED_ORDERS)
    }
}

impl EndOfRunCheck {
    /// Create a check expecting `expected_filled_orders` fills.
    #[must_use]
    pub const fn new(expected_filled_orders: usize) -> Self {
        Self {
            expected_filled_orders,
        }
    }

    /// Get the expected filled order count.
    #[must_use]
    pub const fn expected_filled_orders(&self) -> usize {
        self.expected_filled_orders
    }

    /// Check the final state of a run.
    ///
    /// Both invariants are evaluated independently; a residual position is
    /// reported whatever the fill count.
    ///
    /// # Errors
    ///
    /// Returns a `RunInvariantReport` listing every violation.
    pub fn check(
        &self,
        open_groups: &[PositionGroup],
        filled_orders: usize,
    ) -> Result<(), RunInvariantReport> {
        let mut violations = Vec::new();

        let open_legs: usize = open_groups.iter().map(|g| g.open_legs().count()).sum();
        if open_legs > 0 {
            violations.push(RunInvariantViolation::ResidualPosition { open_legs });
        }

        if filled_orders != self.expected_filled_orders {
            violations.push(RunInvariantViolation::OrderCountMismatch {
                expected: self.expected_filled_orders,
                actual: filled_orders,
            });
        }

        RunInvariantReport::from_violations(violations).map_or(Ok(()), Err)
    }
}
