//! Position Leg Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::option_chain::OptionRight;

/// One held leg of a position group as reported by the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionLeg {
    /// Call or put.
    right: OptionRight,
    /// Strike price.
    strike: Decimal,
    /// Expiration date.
    expiration: NaiveDate,
    /// Held contracts (positive long, negative short).
    signed_quantity: i64,
}

impl PositionLeg {
    /// Create a new leg.
    #[must_use]
    pub const fn new(
        right: OptionRight,
        strike: Decimal,
        expiration: NaiveDate,
        signed_quantity: i64,
    ) -> Self {
        Self {
            right,
            strike,
            expiration,
            signed_quantity,
        }
    }

    /// Get the option right.
    #[must_use]
    pub const fn right(&self) -> OptionRight {
        self.right
    }

    /// Get the strike price.
    #[must_use]
    pub const fn strike(&self) -> Decimal {
        self.strike
    }

    /// Get the expiration date.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }

    /// Get the signed quantity.
    #[must_use]
    pub const fn signed_quantity(&self) -> i64 {
        self.signed_quantity
    }

    /// Check if nothing is held.
    #[must_use]
    pub const fn is_flat(&self) -> bool {
        self.signed_quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leg(quantity: i64) -> PositionLeg {
        PositionLeg::new(
            OptionRight::Call,
            Decimal::new(750, 0),
            NaiveDate::from_ymd_opt(2016, 1, 15).unwrap(),
            quantity,
        )
    }

    #[test]
    fn leg_flat_only_at_zero() {
        assert!(!leg(2).is_flat());
        assert!(!leg(-2).is_flat());
        assert!(leg(0).is_flat());
    }

    #[test]
    fn leg_accessors() {
        let leg = leg(-3);
        assert_eq!(leg.right(), OptionRight::Call);
        assert_eq!(leg.strike(), Decimal::new(750, 0));
        assert_eq!(leg.signed_quantity(), -3);
    }
}
