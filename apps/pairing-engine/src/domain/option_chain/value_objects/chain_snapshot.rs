//! Chain Snapshot Value Object

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::OptionContract;
use crate::domain::option_chain::errors::ChainError;
use crate::domain::shared::Symbol;

/// Point-in-time option chain for a single underlying.
///
/// Contracts are unordered. A snapshot is immutable once built; every
/// constructor path (including deserialization) validates the inputs.
/// `as_of` is the trading date the chain was observed on, when known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ChainSnapshotData")]
pub struct ChainSnapshot {
    /// Underlying symbol.
    underlying: Symbol,
    /// Current underlying price.
    underlying_price: Decimal,
    /// Available contracts.
    contracts: Vec<OptionContract>,
    /// Observation date.
    as_of: Option<NaiveDate>,
}

/// Unvalidated wire shape of a snapshot.
#[derive(Deserialize)]
struct ChainSnapshotData {
    underlying: Symbol,
    underlying_price: Decimal,
    contracts: Vec<OptionContract>,
    #[serde(default)]
    as_of: Option<NaiveDate>,
}

impl TryFrom<ChainSnapshotData> for ChainSnapshot {
    type Error = ChainError;

    fn try_from(data: ChainSnapshotData) -> Result<Self, Self::Error> {
        let snapshot = Self::new(data.underlying, data.underlying_price, data.contracts)?;
        Ok(match data.as_of {
            Some(as_of) => snapshot.with_as_of(as_of),
            None => snapshot,
        })
    }
}

impl ChainSnapshot {
    /// Create a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns `ChainError` if the underlying price or any strike is not
    /// strictly positive.
    pub fn new(
        underlying: Symbol,
        underlying_price: Decimal,
        contracts: Vec<OptionContract>,
    ) -> Result<Self, ChainError> {
        if underlying_price <= Decimal::ZERO {
            return Err(ChainError::NonPositiveUnderlyingPrice {
                price: underlying_price,
            });
        }

        if let Some(bad) = contracts.iter().find(|c| c.strike() <= Decimal::ZERO) {
            return Err(ChainError::NonPositiveStrike {
                right: bad.right(),
                strike: bad.strike(),
                expiration: bad.expiration(),
            });
        }

        Ok(Self {
            underlying,
            underlying_price,
            contracts,
            as_of: None,
        })
    }

    /// Stamp the observation date.
    #[must_use]
    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = Some(as_of);
        self
    }

    /// Copy of this snapshot keeping only the contracts matching `keep`.
    #[must_use]
    pub fn retain(&self, keep: impl Fn(&OptionContract) -> bool) -> Self {
        Self {
            underlying: self.underlying.clone(),
            underlying_price: self.underlying_price,
            contracts: self.contracts.iter().copied().filter(|c| keep(c)).collect(),
            as_of: self.as_of,
        }
    }

    /// Get the underlying symbol.
    #[must_use]
    pub const fn underlying(&self) -> &Symbol {
        &self.underlying
    }

    /// Get the underlying price.
    #[must_use]
    pub const fn underlying_price(&self) -> Decimal {
        self.underlying_price
    }

    /// Get the contracts in snapshot order.
    #[must_use]
    pub fn contracts(&self) -> &[OptionContract] {
        &self.contracts
    }

    /// Number of contracts in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Check if the snapshot has no contracts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Get the observation date, if known.
    #[must_use]
    pub const fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}
