//! Contract Selector Service
//!
//! Deterministic pairing of one call and one put from a chain snapshot.
//!
//! # Policies
//!
//! - **Straddle**: contracts are grouped by `(strike, expiration)`; the
//!   best-ranked group holding both a call and a put wins.
//! - **Strangle**: contracts are grouped by expiration in rank order; the
//!   first expiry where the preferred call strike sits above the preferred
//!   put strike wins.
//!
//! `None` means "no qualifying pair in this snapshot" and is a normal
//! outcome; the caller retries on the next snapshot.

use rust_decimal::Decimal;

use super::ranking::{group_in_rank_order, rank_by_moneyness};
use crate::domain::option_chain::{ChainSnapshot, OptionContract};
use crate::domain::strategy_selection::value_objects::{
    ContractPair, StranglePreference, StrategyShape,
};

/// Selects contract pairs for two-leg strategies.
///
/// Stateless apart from its strangle strike preference; every call is a
/// pure function of the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractSelector {
    strangle_preference: StranglePreference,
}

impl ContractSelector {
    /// Create a selector with the given strangle strike preference.
    #[must_use]
    pub const fn new(strangle_preference: StranglePreference) -> Self {
        Self {
            strangle_preference,
        }
    }

    /// Get the strangle strike preference.
    #[must_use]
    pub const fn strangle_preference(&self) -> StranglePreference {
        self.strangle_preference
    }

    /// Run the selection policy for `shape`.
    #[must_use]
    pub fn select(&self, shape: StrategyShape, snapshot: &ChainSnapshot) -> Option<ContractPair> {
        let pair = match shape {
            StrategyShape::Straddle => self.select_straddle(snapshot),
            StrategyShape::Strangle => self.select_strangle(snapshot),
        };

        match &pair {
            Some(pair) => tracing::debug!(
                underlying = %snapshot.underlying(),
                shape = %shape,
                call_strike = %pair.call().strike(),
                put_strike = %pair.put().strike(),
                expiration = %pair.expiration(),
                "Selected contract pair"
            ),
            None => tracing::debug!(
                underlying = %snapshot.underlying(),
                shape = %shape,
                contracts = snapshot.len(),
                "No qualifying contract pair"
            ),
        }

        pair
    }

    /// Straddle pair: same strike and expiry, closest to the money,
    /// longest-dated on ties.
    #[must_use]
    pub fn select_straddle(&self, snapshot: &ChainSnapshot) -> Option<ContractPair> {
        let ranked = rank_by_moneyness(snapshot);
        let groups = group_in_rank_order(&ranked, |c| (c.strike(), c.expiration()));

        groups.iter().find_map(|group| {
            let call = first_of(group, OptionContract::is_call)?;
            let put = first_of(group, OptionContract::is_put)?;
            warn_on_duplicates(group, call);
            warn_on_duplicates(group, put);
            Some(ContractPair::from_matched(*call, *put))
        })
    }

    /// Strangle pair: same expiry, call strike strictly above put strike.
    ///
    /// Expiry groups are visited in moneyness rank order; strikes inside a
    /// group follow the configured [`StranglePreference`].
    #[must_use]
    pub fn select_strangle(&self, snapshot: &ChainSnapshot) -> Option<ContractPair> {
        let spot = snapshot.underlying_price();
        let ranked = rank_by_moneyness(snapshot);
        let groups = group_in_rank_order(&ranked, OptionContract::expiration);

        groups.iter().find_map(|group| {
            let (call, put) = match self.strangle_preference {
                StranglePreference::NearestOutOfTheMoney => nearest_out_of_the_money(group, spot),
                StranglePreference::Widest => widest(group),
            };
            let (call, put) = (call?, put?);

            if call.strike() <= put.strike() {
                return None;
            }

            warn_on_duplicates(group, call);
            warn_on_duplicates(group, put);
            Some(ContractPair::from_matched(*call, *put))
        })
    }
}

/// First contract in `group` matching `predicate`.
fn first_of<'a>(
    group: &[&'a OptionContract],
    predicate: impl Fn(&OptionContract) -> bool,
) -> Option<&'a OptionContract> {
    group.iter().copied().find(|c| predicate(c))
}

/// First contract in `group` matching `predicate` whose strike wins
/// against every later candidate under `better`.
///
/// Ties keep the earliest candidate so duplicates resolve to the first
/// one encountered.
fn extreme_strike<'a>(
    group: &[&'a OptionContract],
    predicate: impl Fn(&OptionContract) -> bool,
    better: impl Fn(Decimal, Decimal) -> bool,
) -> Option<&'a OptionContract> {
    group
        .iter()
        .copied()
        .filter(|c| predicate(c))
        .fold(None, |best, candidate| match best {
            Some(current) if !better(candidate.strike(), current.strike()) => Some(current),
            _ => Some(candidate),
        })
}

/// Lowest-strike call above spot and highest-strike put below spot.
fn nearest_out_of_the_money<'a>(
    group: &[&'a OptionContract],
    spot: Decimal,
) -> (Option<&'a OptionContract>, Option<&'a OptionContract>) {
    let call = extreme_strike(
        group,
        |c| c.is_call() && c.is_out_of_the_money(spot),
        |candidate, current| candidate < current,
    );
    let put = extreme_strike(
        group,
        |c| c.is_put() && c.is_out_of_the_money(spot),
        |candidate, current| candidate > current,
    );
    (call, put)
}

/// Highest-strike call and lowest-strike put.
fn widest<'a>(
    group: &[&'a OptionContract],
) -> (Option<&'a OptionContract>, Option<&'a OptionContract>) {
    let call = extreme_strike(group, OptionContract::is_call, |candidate, current| {
        candidate > current
    });
    let put = extreme_strike(group, OptionContract::is_put, |candidate, current| {
        candidate < current
    });
    (call, put)
}

/// Log when the snapshot repeats the identity of a chosen contract.
fn warn_on_duplicates(group: &[&OptionContract], chosen: &OptionContract) {
    let copies = group.iter().filter(|c| **c == chosen).count();
    if copies > 1 {
        tracing::warn!(
            right = %chosen.right(),
            strike = %chosen.strike(),
            expiration = %chosen.expiration(),
            copies,
            "Duplicate contract in chain snapshot, using the first one"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Symbol;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn near() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 1, 15).unwrap()
    }

    fn far() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 2, 19).unwrap()
    }

    fn snapshot(spot: Decimal, contracts: Vec<OptionContract>) -> ChainSnapshot {
        ChainSnapshot::new(Symbol::new("GOOG"), spot, contracts).unwrap()
    }

    // =========================================================================
    // Straddle
    // =========================================================================

    #[test]
    fn straddle_prefers_later_expiry_on_moneyness_tie() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), near()),
                OptionContract::put(dec!(100), near()),
                OptionContract::call(dec!(100), far()),
                OptionContract::put(dec!(100), far()),
            ],
        );

        let pair = ContractSelector::default().select_straddle(&snap).unwrap();
        assert_eq!(pair.expiration(), far());
        assert_eq!(pair.call().strike(), dec!(100));
        assert_eq!(pair.put().strike(), dec!(100));
    }

    #[test]
    fn straddle_prefers_closest_strike_over_later_expiry() {
        let snap = snapshot(
            dec!(748),
            vec![
                OptionContract::call(dec!(750), near()),
                OptionContract::put(dec!(750), near()),
                OptionContract::call(dec!(740), far()),
                OptionContract::put(dec!(740), far()),
            ],
        );

        let pair = ContractSelector::default().select_straddle(&snap).unwrap();
        assert_eq!(pair.call().strike(), dec!(750));
        assert_eq!(pair.expiration(), near());
    }

    #[test]
    fn straddle_skips_groups_missing_a_side() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), far()),
                OptionContract::call(dec!(105), near()),
                OptionContract::put(dec!(105), near()),
            ],
        );

        let pair = ContractSelector::default().select_straddle(&snap).unwrap();
        assert_eq!(pair.call().strike(), dec!(105));
        assert_eq!(pair.put().strike(), dec!(105));
        assert_eq!(pair.expiration(), near());
    }

    #[test]
    fn straddle_equidistant_strikes_take_lower_strike() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(105), near()),
                OptionContract::put(dec!(105), near()),
                OptionContract::call(dec!(95), near()),
                OptionContract::put(dec!(95), near()),
            ],
        );

        let pair = ContractSelector::default().select_straddle(&snap).unwrap();
        assert_eq!(pair.call().strike(), dec!(95));
    }

    #[test]
    fn straddle_tolerates_duplicate_contracts() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), near()),
                OptionContract::call(dec!(100), near()),
                OptionContract::put(dec!(100), near()),
            ],
        );

        let pair = ContractSelector::default().select_straddle(&snap).unwrap();
        assert!(pair.shares_strike());
        assert!(pair.shares_expiration());
    }

    #[test]
    fn straddle_none_without_matching_group() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), near()),
                OptionContract::put(dec!(100), far()),
                OptionContract::put(dec!(95), near()),
            ],
        );

        assert!(ContractSelector::default().select_straddle(&snap).is_none());
    }

    #[test]
    fn straddle_none_on_empty_snapshot() {
        let snap = snapshot(dec!(100), vec![]);
        assert!(ContractSelector::default().select_straddle(&snap).is_none());
    }

    // =========================================================================
    // Strangle
    // =========================================================================

    fn single_expiry_strangle_chain() -> ChainSnapshot {
        snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(105), near()),
                OptionContract::call(dec!(110), near()),
                OptionContract::put(dec!(90), near()),
                OptionContract::put(dec!(95), near()),
            ],
        )
    }

    #[test]
    fn strangle_nearest_picks_closest_out_of_the_money_strikes() {
        let pair = ContractSelector::new(StranglePreference::NearestOutOfTheMoney)
            .select_strangle(&single_expiry_strangle_chain())
            .unwrap();

        assert_eq!(pair.call().strike(), dec!(105));
        assert_eq!(pair.put().strike(), dec!(95));
    }

    #[test]
    fn strangle_default_picks_outer_strikes() {
        let pair = ContractSelector::default()
            .select_strangle(&single_expiry_strangle_chain())
            .unwrap();

        assert_eq!(pair.call().strike(), dec!(110));
        assert_eq!(pair.put().strike(), dec!(90));
    }

    #[test]
    fn strangle_nearest_ignores_in_the_money_strikes() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(95), near()),
                OptionContract::call(dec!(100), near()),
                OptionContract::put(dec!(100), near()),
                OptionContract::put(dec!(105), near()),
            ],
        );

        assert!(
            ContractSelector::new(StranglePreference::NearestOutOfTheMoney)
                .select_strangle(&snap)
                .is_none()
        );
    }

    #[test]
    fn strangle_default_accepts_in_the_money_strikes() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(95), near()),
                OptionContract::call(dec!(98), near()),
                OptionContract::put(dec!(90), near()),
                OptionContract::put(dec!(92), near()),
            ],
        );

        let pair = ContractSelector::default()
            .select(StrategyShape::Strangle, &snap)
            .unwrap();
        assert_eq!(pair.call().strike(), dec!(98));
        assert_eq!(pair.put().strike(), dec!(90));
    }

    #[test]
    fn strangle_widest_requires_call_above_put() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(90), near()),
                OptionContract::put(dec!(95), near()),
            ],
        );

        assert!(
            ContractSelector::new(StranglePreference::Widest)
                .select_strangle(&snap)
                .is_none()
        );
    }

    #[test]
    fn strangle_falls_through_to_next_expiry() {
        // The far expiry is reached first (its 100 put is at the money) but
        // has no call, so the near expiry supplies the pair.
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::put(dec!(100), far()),
                OptionContract::put(dec!(90), far()),
                OptionContract::call(dec!(104), near()),
                OptionContract::put(dec!(96), near()),
            ],
        );

        let pair = ContractSelector::default().select_strangle(&snap).unwrap();
        assert_eq!(pair.expiration(), near());
        assert_eq!(pair.call().strike(), dec!(104));
        assert_eq!(pair.put().strike(), dec!(96));
    }

    #[test]
    fn strangle_visits_expiries_in_rank_order() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(110), near()),
                OptionContract::put(dec!(90), near()),
                OptionContract::call(dec!(101), far()),
                OptionContract::put(dec!(80), far()),
            ],
        );

        let pair = ContractSelector::default().select_strangle(&snap).unwrap();
        assert_eq!(pair.expiration(), far());
        assert_eq!(pair.call().strike(), dec!(101));
        assert_eq!(pair.put().strike(), dec!(80));
    }

    #[test]
    fn select_dispatches_on_shape() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), near()),
                OptionContract::put(dec!(100), near()),
                OptionContract::call(dec!(105), near()),
                OptionContract::put(dec!(95), near()),
            ],
        );
        let selector = ContractSelector::default();

        let straddle = selector.select(StrategyShape::Straddle, &snap).unwrap();
        assert!(straddle.shares_strike());

        let strangle = selector.select(StrategyShape::Strangle, &snap).unwrap();
        assert_eq!(strangle.call().strike(), dec!(105));
        assert_eq!(strangle.put().strike(), dec!(95));

        let nearest = ContractSelector::new(StranglePreference::NearestOutOfTheMoney);
        assert_eq!(nearest.strangle_preference(), StranglePreference::NearestOutOfTheMoney);
        assert_eq!(selector.strangle_preference(), StranglePreference::Widest);
    }

    #[test]
    fn one_sided_chain_yields_no_pair() {
        let snap = snapshot(
            dec!(100),
            vec![
                OptionContract::call(dec!(100), near()),
                OptionContract::call(dec!(110), near()),
            ],
        );
        let selector = ContractSelector::new(StranglePreference::Widest);

        assert!(selector.select(StrategyShape::Straddle, &snap).is_none());
        assert!(selector.select(StrategyShape::Strangle, &snap).is_none());
    }
}
