//! Contract Pair Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::option_chain::{OptionContract, OptionRight};
use crate::domain::strategy_selection::errors::StrategyError;

/// One call and one put drawn from the same snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractPair {
    /// The call leg.
    call: OptionContract,
    /// The put leg.
    put: OptionContract,
}

impl ContractPair {
    /// Create a pair, checking each contract sits on its own side.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::MismatchedRight` if `call` is not a call or
    /// `put` is not a put.
    pub fn new(call: OptionContract, put: OptionContract) -> Result<Self, StrategyError> {
        if !call.is_call() {
            return Err(StrategyError::MismatchedRight {
                expected: OptionRight::Call,
                actual: call.right(),
            });
        }
        if !put.is_put() {
            return Err(StrategyError::MismatchedRight {
                expected: OptionRight::Put,
                actual: put.right(),
            });
        }
        Ok(Self { call, put })
    }

    /// Create a pair from contracts already sorted onto their sides.
    pub(crate) fn from_matched(call: OptionContract, put: OptionContract) -> Self {
        debug_assert!(call.is_call() && put.is_put());
        Self { call, put }
    }

    /// Get the call contract.
    #[must_use]
    pub const fn call(&self) -> &OptionContract {
        &self.call
    }

    /// Get the put contract.
    #[must_use]
    pub const fn put(&self) -> &OptionContract {
        &self.put
    }

    /// Check if both legs share an expiration.
    #[must_use]
    pub fn shares_expiration(&self) -> bool {
        self.call.expiration() == self.put.expiration()
    }

    /// Check if both legs share a strike.
    #[must_use]
    pub fn shares_strike(&self) -> bool {
        self.call.strike() == self.put.strike()
    }

    /// Call strike minus put strike.
    #[must_use]
    pub fn strike_width(&self) -> Decimal {
        self.call.strike() - self.put.strike()
    }

    /// Expiration of the call leg.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.call.expiration()
    }
}
