//! Chain Filter Value Object
//!
//! Narrows a snapshot to a window of strikes around the money and a window
//! of days to expiration before any pair is selected.
//!
//! Strike ranks are positions in the sorted list of distinct strikes, with
//! rank 0 at the strike nearest the underlying price (the lower strike on
//! ties). The expiry window needs the snapshot's `as_of` date and is skipped
//! when the snapshot does not carry one.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ChainSnapshot, OptionContract};

/// Strike and expiry window applied to chain snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainFilter {
    /// Lowest strike rank kept, relative to the at-the-money strike.
    pub min_strike_rank: i32,
    /// Highest strike rank kept, relative to the at-the-money strike.
    pub max_strike_rank: i32,
    /// Fewest days to expiration kept.
    pub min_days: u32,
    /// Most days to expiration kept.
    pub max_days: u32,
}

impl Default for ChainFilter {
    /// Two strikes either side of the money, expiring within 180 days.
    fn default() -> Self {
        Self::new(-2, 2, 0, 180)
    }
}

impl ChainFilter {
    /// Create a filter.
    #[must_use]
    pub const fn new(min_strike_rank: i32, max_strike_rank: i32, min_days: u32, max_days: u32) -> Self {
        Self {
            min_strike_rank,
            max_strike_rank,
            min_days,
            max_days,
        }
    }

    /// Check that both windows are non-empty.
    #[must_use]
    pub const fn is_well_formed(&self) -> bool {
        self.min_strike_rank <= self.max_strike_rank && self.min_days <= self.max_days
    }

    /// Apply the filter, returning the narrowed snapshot.
    #[must_use]
    pub fn apply(&self, snapshot: &ChainSnapshot) -> ChainSnapshot {
        let strikes = self.strike_window(snapshot);
        let as_of = snapshot.as_of();

        let filtered = snapshot.retain(|contract| {
            let in_strikes = strikes.is_some_and(|(low, high)| {
                contract.strike() >= low && contract.strike() <= high
            });
            in_strikes && as_of.is_none_or(|date| self.in_expiry_window(contract, date))
        });

        tracing::debug!(
            underlying = %snapshot.underlying(),
            before = snapshot.len(),
            after = filtered.len(),
            "Applied chain filter"
        );
        filtered
    }

    /// Lowest and highest strike inside the rank window, if any.
    fn strike_window(&self, snapshot: &ChainSnapshot) -> Option<(Decimal, Decimal)> {
        let strikes: Vec<Decimal> = snapshot
            .contracts()
            .iter()
            .map(OptionContract::strike)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let spot = snapshot.underlying_price();
        let (atm, _) = strikes
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (**a - spot).abs().cmp(&(**b - spot).abs()))?;

        let last = strikes.len() as i64 - 1;
        let low = (atm as i64 + i64::from(self.min_strike_rank)).max(0);
        let high = (atm as i64 + i64::from(self.max_strike_rank)).min(last);
        if low > high {
            return None;
        }

        Some((strikes[low as usize], strikes[high as usize]))
    }

    fn in_expiry_window(&self, contract: &OptionContract, as_of: chrono::NaiveDate) -> bool {
        if contract.is_expired(as_of) {
            return false;
        }
        let days = (contract.expiration() - as_of).num_days();
        days >= i64::from(self.min_days) && days <= i64::from(self.max_days)
    }
}
