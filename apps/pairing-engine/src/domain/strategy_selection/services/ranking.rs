//! Moneyness ranking shared by the selection policies.
//!
//! Contracts are ranked closest-to-the-money first, then longest-dated,
//! then lowest strike, then calls before puts. The comparator is total over
//! contract identity so the ranking never depends on snapshot order; only
//! exact duplicates keep their snapshot order (the sort is stable).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use rust_decimal::Decimal;

use crate::domain::option_chain::{ChainSnapshot, OptionContract};

/// Compare two contracts by moneyness rank.
pub(super) fn compare_by_moneyness(
    a: &OptionContract,
    b: &OptionContract,
    underlying_price: Decimal,
) -> Ordering {
    a.distance_from(underlying_price)
        .cmp(&b.distance_from(underlying_price))
        .then_with(|| b.expiration().cmp(&a.expiration()))
        .then_with(|| a.strike().cmp(&b.strike()))
        .then_with(|| a.right().cmp(&b.right()))
}

/// All contracts of the snapshot in moneyness rank order.
pub(super) fn rank_by_moneyness(snapshot: &ChainSnapshot) -> Vec<&OptionContract> {
    let spot = snapshot.underlying_price();
    let mut ranked: Vec<&OptionContract> = snapshot.contracts().iter().collect();
    ranked.sort_by(|a, b| compare_by_moneyness(a, b, spot));
    ranked
}

/// Partition ranked contracts by `key`.
///
/// Groups come back in the order their first member appears in `ranked`,
/// and members keep their ranked order.
pub(super) fn group_in_rank_order<'a, K, F>(
    ranked: &[&'a OptionContract],
    key: F,
) -> Vec<Vec<&'a OptionContract>>
where
    K: Eq + Hash,
    F: Fn(&OptionContract) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<Vec<&'a OptionContract>> = Vec::new();

    for &contract in ranked {
        let slot = *index.entry(key(contract)).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(contract);
    }

    groups
}
