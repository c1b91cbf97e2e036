//! Position Verifier Service
//!
//! Confirms the runtime produced exactly the requested two-leg structure.
//!
//! All checks run on every call and are reported together, in this order:
//! accounting model, leg count, missing call, missing put, duplicated call,
//! duplicated put, call quantity, put quantity. A side counts as resolved
//! only when exactly one leg carries it; quantity checks run on resolved
//! sides only.

use crate::domain::option_chain::OptionRight;
use crate::domain::position_verification::errors::{VerificationFailure, VerificationReport};
use crate::domain::position_verification::value_objects::{
    AccountingModelTag, ExpectedShape, PositionGroup, PositionLeg,
};

/// Legs in a straddle or strangle group.
const TWO_LEG_COUNT: usize = 2;

/// Verifies position groups against an expected two-leg shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionVerifier {
    expected_model: AccountingModelTag,
}

impl Default for PositionVerifier {
    fn default() -> Self {
        Self::new(AccountingModelTag::option_strategy())
    }
}

impl PositionVerifier {
    /// Create a verifier requiring the given accounting model.
    #[must_use]
    pub const fn new(expected_model: AccountingModelTag) -> Self {
        Self { expected_model }
    }

    /// Get the required accounting model.
    #[must_use]
    pub const fn expected_model(&self) -> &AccountingModelTag {
        &self.expected_model
    }

    /// Verify `group` against `expected`.
    ///
    /// # Errors
    ///
    /// Returns a `VerificationReport` listing every failed check.
    pub fn verify(
        &self,
        group: &PositionGroup,
        expected: ExpectedShape,
    ) -> Result<(), VerificationReport> {
        let mut failures = Vec::new();

        if group.accounting_model() != &self.expected_model {
            failures.push(VerificationFailure::MismatchedAccountingModel {
                expected: self.expected_model.clone(),
                actual: group.accounting_model().clone(),
            });
        }

        if group.leg_count() != TWO_LEG_COUNT {
            failures.push(VerificationFailure::UnexpectedLegCount {
                expected: TWO_LEG_COUNT,
                actual: group.leg_count(),
            });
        }

        let call = SideLegs::collect(group, OptionRight::Call);
        let put = SideLegs::collect(group, OptionRight::Put);

        for side in [&call, &put] {
            if side.is_missing() {
                failures.push(VerificationFailure::MissingLeg { right: side.right });
            }
        }

        for side in [&call, &put] {
            if side.legs.len() > 1 {
                failures.push(VerificationFailure::DuplicateLeg {
                    right: side.right,
                    count: side.legs.len(),
                });
            }
        }

        for side in [&call, &put] {
            if let Some(leg) = side.resolved() {
                let wanted = expected.quantity_for(side.right);
                if leg.signed_quantity() != wanted {
                    failures.push(VerificationFailure::QuantityMismatch {
                        right: side.right,
                        expected: wanted,
                        actual: leg.signed_quantity(),
                    });
                }
            }
        }

        match VerificationReport::from_failures(failures) {
            None => Ok(()),
            Some(report) => {
                tracing::warn!(
                    failures = report.len(),
                    legs = group.leg_count(),
                    accounting_model = %group.accounting_model(),
                    "Position group failed verification"
                );
                Err(report)
            }
        }
    }
}

/// Legs of one side found in a group.
struct SideLegs<'a> {
    right: OptionRight,
    legs: Vec<&'a PositionLeg>,
}

impl<'a> SideLegs<'a> {
    fn collect(group: &'a PositionGroup, right: OptionRight) -> Self {
        Self {
            right,
            legs: group.legs_with_right(right).collect(),
        }
    }

    fn is_missing(&self) -> bool {
        self.legs.is_empty()
    }

    fn resolved(&self) -> Option<&'a PositionLeg> {
        match self.legs.as_slice() {
            [leg] => Some(*leg),
            _ => None,
        }
    }
}
