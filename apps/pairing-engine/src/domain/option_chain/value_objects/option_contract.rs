//! Option Contract Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Option right (call or put).
///
/// Ordered `Call` before `Put`, which is the final tie-break of the
/// moneyness ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionRight {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionRight {
    /// Label used in logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for OptionRight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tradable option contract within a chain snapshot.
///
/// Identity is `(right, strike, expiration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionContract {
    /// Call or put.
    right: OptionRight,
    /// Strike price.
    strike: Decimal,
    /// Expiration date.
    expiration: NaiveDate,
}

impl OptionContract {
    /// Create a new option contract.
    #[must_use]
    pub const fn new(right: OptionRight, strike: Decimal, expiration: NaiveDate) -> Self {
        Self {
            right,
            strike,
            expiration,
        }
    }

    /// Create a call option contract.
    #[must_use]
    pub const fn call(strike: Decimal, expiration: NaiveDate) -> Self {
        Self::new(OptionRight::Call, strike, expiration)
    }

    /// Create a put option contract.
    #[must_use]
    pub const fn put(strike: Decimal, expiration: NaiveDate) -> Self {
        Self::new(OptionRight::Put, strike, expiration)
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

    /// Check if this is a call option.
    #[must_use]
    pub const fn is_call(&self) -> bool {
        matches!(self.right, OptionRight::Call)
    }

    /// Check if this is a put option.
    #[must_use]
    pub const fn is_put(&self) -> bool {
        matches!(self.right, OptionRight::Put)
    }

    /// Absolute distance between the strike and the underlying price.
    #[must_use]
    pub fn distance_from(&self, underlying_price: Decimal) -> Decimal {
        (self.strike - underlying_price).abs()
    }

    /// Check if the contract is strictly out of the money.
    ///
    /// Calls above spot and puts below spot; a strike equal to spot is
    /// at the money and never qualifies.
    #[must_use]
    pub fn is_out_of_the_money(&self, underlying_price: Decimal) -> bool {
        match self.right {
            OptionRight::Call => self.strike > underlying_price,
            OptionRight::Put => self.strike < underlying_price,
        }
    }

    /// Check if the option has expired.
    #[must_use]
    pub fn is_expired(&self, as_of: NaiveDate) -> bool {
        self.expiration < as_of
    }
}
