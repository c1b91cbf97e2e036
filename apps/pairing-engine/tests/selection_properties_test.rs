//! Property tests for contract selection.
//!
//! Chains are generated with random strikes, expirations and sides; the
//! selector must stay deterministic and only ever return well-formed pairs.

#![allow(clippy::unwrap_used)]

use chrono::{Days, NaiveDate};
use pairing_engine::{
    ChainSnapshot, ContractSelector, OptionContract, OptionRight, StranglePreference,
    StrategyShape, Symbol,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2016, 1, 15).unwrap()
}

fn contract_strategy() -> impl Strategy<Value = OptionContract> {
    (any::<bool>(), 1u32..60, 0u64..4).prop_map(|(is_call, strike_step, week)| {
        let right = if is_call {
            OptionRight::Call
        } else {
            OptionRight::Put
        };
        let strike = Decimal::from(strike_step * 5);
        let expiration = base_date().checked_add_days(Days::new(week * 7)).unwrap();
        OptionContract::new(right, strike, expiration)
    })
}

fn chain_strategy() -> impl Strategy<Value = ChainSnapshot> {
    (1u32..300, prop::collection::vec(contract_strategy(), 0..40)).prop_map(
        |(spot, contracts)| {
            ChainSnapshot::new(Symbol::new("SPY"), Decimal::from(spot), contracts).unwrap()
        },
    )
}

fn one_sided(chain: &ChainSnapshot, keep: OptionRight) -> ChainSnapshot {
    let contracts = chain
        .contracts()
        .iter()
        .copied()
        .filter(|c| c.right() == keep)
        .collect();
    ChainSnapshot::new(chain.underlying().clone(), chain.underlying_price(), contracts).unwrap()
}

fn selectors() -> [ContractSelector; 2] {
    [
        ContractSelector::new(StranglePreference::NearestOutOfTheMoney),
        ContractSelector::new(StranglePreference::Widest),
    ]
}

proptest! {
    #[test]
    fn test_one_sided_chain_selects_nothing(chain in chain_strategy(), calls in any::<bool>()) {
        let keep = if calls { OptionRight::Call } else { OptionRight::Put };
        let chain = one_sided(&chain, keep);
        for selector in selectors() {
            prop_assert!(selector.select(StrategyShape::Straddle, &chain).is_none());
            prop_assert!(selector.select(StrategyShape::Strangle, &chain).is_none());
        }
    }

    #[test]
    fn test_selection_is_idempotent(chain in chain_strategy()) {
        for selector in selectors() {
            for shape in [StrategyShape::Straddle, StrategyShape::Strangle] {
                prop_assert_eq!(selector.select(shape, &chain), selector.select(shape, &chain));
            }
        }
    }

    #[test]
    fn test_selection_ignores_input_order(chain in chain_strategy()) {
        let mut reversed: Vec<_> = chain.contracts().to_vec();
        reversed.reverse();
        let reversed =
            ChainSnapshot::new(chain.underlying().clone(), chain.underlying_price(), reversed)
                .unwrap();

        for selector in selectors() {
            for shape in [StrategyShape::Straddle, StrategyShape::Strangle] {
                prop_assert_eq!(selector.select(shape, &chain), selector.select(shape, &reversed));
            }
        }
    }

    #[test]
    fn test_straddle_shares_strike_and_expiration(chain in chain_strategy()) {
        if let Some(pair) = ContractSelector::default().select_straddle(&chain) {
            prop_assert!(pair.call().is_call());
            prop_assert!(pair.put().is_put());
            prop_assert_eq!(pair.call().strike(), pair.put().strike());
            prop_assert_eq!(pair.call().expiration(), pair.put().expiration());
        }
    }

    #[test]
    fn test_strangle_call_above_put_on_one_expiration(chain in chain_strategy()) {
        for selector in selectors() {
            if let Some(pair) = selector.select_strangle(&chain) {
                prop_assert!(pair.call().is_call());
                prop_assert!(pair.put().is_put());
                prop_assert!(pair.call().strike() > pair.put().strike());
                prop_assert_eq!(pair.call().expiration(), pair.put().expiration());
            }
        }
    }

    #[test]
    fn test_nearest_strangle_legs_are_out_of_the_money(chain in chain_strategy()) {
        let selector = ContractSelector::new(StranglePreference::NearestOutOfTheMoney);
        if let Some(pair) = selector.select_strangle(&chain) {
            let spot = chain.underlying_price();
            prop_assert!(pair.call().strike() > spot);
            prop_assert!(pair.put().strike() < spot);
        }
    }

    #[test]
    fn test_straddle_is_nearest_to_spot(chain in chain_strategy()) {
        if let Some(pair) = ContractSelector::default().select_straddle(&chain) {
            let spot = chain.underlying_price();
            let chosen = pair.call().distance_from(spot);
            for call in chain.contracts().iter().filter(|c| c.is_call()) {
                let has_put = chain.contracts().iter().any(|p| {
                    p.is_put() && p.strike() == call.strike() && p.expiration() == call.expiration()
                });
                if has_put {
                    prop_assert!(chosen <= call.distance_from(spot));
                }
            }
        }
    }
}

#[test]
fn test_straddle_prefers_later_expiration_at_same_distance() {
    let near = base_date();
    let far = NaiveDate::from_ymd_opt(2016, 2, 19).unwrap();
    let chain = ChainSnapshot::new(
        Symbol::new("SPY"),
        dec!(100),
        vec![
            OptionContract::call(dec!(100), near),
            OptionContract::put(dec!(100), near),
            OptionContract::call(dec!(100), far),
            OptionContract::put(dec!(100), far),
        ],
    )
    .unwrap();

    let pair = ContractSelector::default().select_straddle(&chain).unwrap();
    assert_eq!(pair.expiration(), far);
    assert_eq!(pair.call().strike(), dec!(100));
}

#[test]
fn test_strangle_strike_preferences() {
    let expiry = base_date();
    let chain = ChainSnapshot::new(
        Symbol::new("SPY"),
        dec!(100),
        vec![
            OptionContract::call(dec!(105), expiry),
            OptionContract::call(dec!(110), expiry),
            OptionContract::put(dec!(90), expiry),
            OptionContract::put(dec!(95), expiry),
        ],
    )
    .unwrap();

    let pair = ContractSelector::new(StranglePreference::NearestOutOfTheMoney)
        .select_strangle(&chain)
        .unwrap();
    assert_eq!(pair.call().strike(), dec!(105));
    assert_eq!(pair.put().strike(), dec!(95));

    let widest = ContractSelector::default().select_strangle(&chain).unwrap();
    assert_eq!(widest.call().strike(), dec!(110));
    assert_eq!(widest.put().strike(), dec!(90));
}
