//! Strategy Selection Errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::option_chain::OptionRight;

/// Errors raised while building pairs and strategy orders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// A contract was placed on the wrong side of a pair.
    #[error("Expected a {expected} contract for the {expected} leg, got {actual}")]
    MismatchedRight {
        /// Right required by the leg.
        expected: OptionRight,
        /// Right of the supplied contract.
        actual: OptionRight,
    },

    /// Call and put do not share an expiration.
    #[error("Pair legs must share an expiration")]
    MismatchedExpiration,

    /// Straddle legs must share a strike.
    #[error("Straddle legs must share a strike, got call {call_strike} and put {put_strike}")]
    MismatchedStrike {
        /// Call strike.
        call_strike: Decimal,
        /// Put strike.
        put_strike: Decimal,
    },

    /// Strangle call strike must sit above the put strike.
    #[error("Strangle call strike {call_strike} must be above put strike {put_strike}")]
    InvertedStrikes {
        /// Call strike.
        call_strike: Decimal,
        /// Put strike.
        put_strike: Decimal,
    },

    /// Strategy quantity must be a positive multiplier.
    #[error("Strategy quantity must be positive, got {quantity}")]
    InvalidQuantity {
        /// The offending quantity.
        quantity: u32,
    },
}
