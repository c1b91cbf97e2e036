//! Position Group Value Object

use serde::{Deserialize, Serialize};

use super::{AccountingModelTag, PositionLeg};
use crate::domain::option_chain::OptionRight;

/// A multi-leg position as grouped and margined by the runtime.
///
/// Legs come in no particular order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGroup {
    /// Held legs.
    legs: Vec<PositionLeg>,
    /// Buying-power model applied to the group.
    accounting_model: AccountingModelTag,
}

impl PositionGroup {
    /// Create a new position group.
    #[must_use]
    pub const fn new(legs: Vec<PositionLeg>, accounting_model: AccountingModelTag) -> Self {
        Self {
            legs,
            accounting_model,
        }
    }

    /// Get the legs.
    #[must_use]
    pub fn legs(&self) -> &[PositionLeg] {
        &self.legs
    }

    /// Get the accounting model tag.
    #[must_use]
    pub const fn accounting_model(&self) -> &AccountingModelTag {
        &self.accounting_model
    }

    /// Get the number of legs.
    #[must_use]
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Legs carrying the given right.
    pub fn legs_with_right(&self, right: OptionRight) -> impl Iterator<Item = &PositionLeg> {
        self.legs.iter().filter(move |leg| leg.right() == right)
    }

    /// Legs with a non-zero quantity.
    pub fn open_legs(&self) -> impl Iterator<Item = &PositionLeg> {
        self.legs.iter().filter(|leg| !leg.is_flat())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn leg(right: OptionRight, quantity: i64) -> PositionLeg {
        PositionLeg::new(
            right,
            Decimal::new(750, 0),
            NaiveDate::from_ymd_opt(2016, 1, 15).unwrap(),
            quantity,
        )
    }

    #[test]
    fn group_filters_by_right() {
        let group = PositionGroup::new(
            vec![
                leg(OptionRight::Put, 2),
                leg(OptionRight::Call, 2),
                leg(OptionRight::Put, 0),
            ],
            AccountingModelTag::option_strategy(),
        );

        assert_eq!(group.leg_count(), 3);
        assert_eq!(group.legs_with_right(OptionRight::Call).count(), 1);
        assert_eq!(group.legs_with_right(OptionRight::Put).count(), 2);
        assert_eq!(group.open_legs().count(), 2);
        assert_eq!(
            group.accounting_model(),
            &AccountingModelTag::option_strategy()
        );
    }
}
