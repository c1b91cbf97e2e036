//! Option Chain Errors

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use super::OptionRight;

/// Malformed chain input.
///
/// These indicate an upstream contract violation by the runtime, not a
/// trading condition, and are never used for "no pair found".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// Underlying price is zero or negative.
    #[error("Underlying price must be positive, got {price}")]
    NonPositiveUnderlyingPrice {
        /// The offending price.
        price: Decimal,
    },

    /// A contract carries a zero or negative strike.
    #[error("Strike must be positive, got {right} {strike} expiring {expiration}")]
    NonPositiveStrike {
        /// Contract right.
        right: OptionRight,
        /// The offending strike.
        strike: Decimal,
        /// Contract expiration.
        expiration: NaiveDate,
    },
}
