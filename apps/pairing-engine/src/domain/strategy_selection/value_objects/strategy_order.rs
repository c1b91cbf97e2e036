//! Strategy Order Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ContractPair, PositionSide, StrategyShape};
use crate::domain::option_chain::OptionRight;
use crate::domain::shared::Symbol;
use crate::domain::strategy_selection::errors::StrategyError;

/// One leg of a strategy order, sized and signed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegRequest {
    /// Call or put.
    pub right: OptionRight,
    /// Strike price.
    pub strike: Decimal,
    /// Expiration date.
    pub expiration: NaiveDate,
    /// Contracts to trade (positive buys, negative sells).
    pub signed_quantity: i64,
}

/// A two-leg strategy ready to be submitted to the runtime.
///
/// The caller keeps the opened order around so it can submit
/// [`StrategyOrder::inverse`] to close it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyOrder {
    /// Underlying symbol.
    underlying: Symbol,
    /// Straddle or strangle.
    shape: StrategyShape,
    /// Long or short.
    side: PositionSide,
    /// Call leg strike.
    call_strike: Decimal,
    /// Put leg strike.
    put_strike: Decimal,
    /// Shared expiration.
    expiration: NaiveDate,
}

impl StrategyOrder {
    /// Build the long strategy from a selected pair.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError` if the pair does not fit the shape: legs on
    /// different expirations, a straddle with different strikes, or a
    /// strangle whose call strike is not above its put strike.
    pub fn open(
        shape: StrategyShape,
        underlying: Symbol,
        pair: &ContractPair,
    ) -> Result<Self, StrategyError> {
        if !pair.shares_expiration() {
            return Err(StrategyError::MismatchedExpiration);
        }

        let call_strike = pair.call().strike();
        let put_strike = pair.put().strike();

        if shape.requires_common_strike() {
            if !pair.shares_strike() {
                return Err(StrategyError::MismatchedStrike {
                    call_strike,
                    put_strike,
                });
            }
        } else if pair.strike_width() <= Decimal::ZERO {
            return Err(StrategyError::InvertedStrikes {
                call_strike,
                put_strike,
            });
        }

        Ok(Self {
            underlying,
            shape,
            side: PositionSide::Long,
            call_strike,
            put_strike,
            expiration: pair.expiration(),
        })
    }

    /// The strategy that closes this one (same legs, opposite side).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            side: self.side.inverse(),
            ..self.clone()
        }
    }

    /// Expand into signed leg requests, call leg first.
    ///
    /// # Errors
    ///
    /// Returns `StrategyError::InvalidQuantity` if `quantity` is zero.
    pub fn legs(&self, quantity: u32) -> Result<[LegRequest; 2], StrategyError> {
        if quantity == 0 {
            return Err(StrategyError::InvalidQuantity { quantity });
        }

        let signed_quantity = i64::from(quantity) * self.side.sign();
        Ok([
            LegRequest {
                right: OptionRight::Call,
                strike: self.call_strike,
                expiration: self.expiration,
                signed_quantity,
            },
            LegRequest {
                right: OptionRight::Put,
                strike: self.put_strike,
                expiration: self.expiration,
                signed_quantity,
            },
        ])
    }

    /// Human-readable strategy name, e.g. "Short Strangle".
    #[must_use]
    pub fn name(&self) -> String {
        format!("{} {}", self.side, self.shape)
    }

    /// Get the underlying symbol.
    #[must_use]
    pub const fn underlying(&self) -> &Symbol {
        &self.underlying
    }

    /// Get the strategy shape.
    #[must_use]
    pub const fn shape(&self) -> StrategyShape {
        self.shape
    }

    /// Get the strategy side.
    #[must_use]
    pub const fn side(&self) -> PositionSide {
        self.side
    }

    /// Get the call strike.
    #[must_use]
    pub const fn call_strike(&self) -> Decimal {
        self.call_strike
    }

    /// Get the put strike.
    #[must_use]
    pub const fn put_strike(&self) -> Decimal {
        self.put_strike
    }

    /// Get the expiration.
    #[must_use]
    pub const fn expiration(&self) -> NaiveDate {
        self.expiration
    }
}
