use anyhow::{anyhow, Result};
use maxdefense_challenges::{sum_armor, ArmorItem, Selection};
use tracing::debug;

/// Catalogs must have fewer items than this so that every subset fits in a
/// `u64` bit pattern.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 64;

/// Fails when a catalog of `n` items is too large to enumerate.
pub fn check_exhaustive_size(n: usize) -> Result<()> {
    if n >= MAX_EXHAUSTIVE_ITEMS {
        return Err(anyhow!(
            "Exhaustive search supports fewer than {} armor items, got {}; filter the catalog first",
            MAX_EXHAUSTIVE_ITEMS,
            n
        ));
    }
    Ok(())
}

/// Finds the subset of `armors` with the greatest total defense whose total
/// cost fits within `total_cost`, by trying every subset.
///
/// Subset `bits` includes armor `j` when bit `j` is set. Subsets are tried in
/// ascending order of `bits` and a later subset only replaces the best one if
/// its defense is strictly greater. Fails without enumerating anything when
/// `armors` has [`MAX_EXHAUSTIVE_ITEMS`] or more items.
pub fn exhaustive_max_defense(armors: &[ArmorItem], total_cost: f64) -> Result<Selection> {
    let n = armors.len();
    check_exhaustive_size(n)?;

    let num_subsets: u64 = 1 << n;
    let best = (0..num_subsets)
        .filter_map(|bits| {
            let (cost, defense) = sum_armor(subset_armors(armors, bits));
            (cost <= total_cost).then_some((bits, defense))
        })
        .fold(None, |best: Option<(u64, f64)>, (bits, defense)| match best {
            Some((_, best_defense)) if defense <= best_defense => best,
            _ => Some((bits, defense)),
        });

    let selection = best
        .map(|(bits, _)| Selection::from_indices(armors, subset_indices(bits, n)))
        .unwrap_or_default();
    debug!(
        num_items = n,
        num_subsets,
        picked = selection.len(),
        total_cost = selection.total_cost,
        total_defense = selection.total_defense,
        "exhaustive search complete"
    );
    Ok(selection)
}

/// The armors whose bits are set in `bits`, in catalog order.
fn subset_armors(armors: &[ArmorItem], bits: u64) -> impl Iterator<Item = &ArmorItem> {
    armors
        .iter()
        .enumerate()
        .filter(move |&(j, _)| (bits >> j) & 1 == 1)
        .map(|(_, armor)| armor)
}

/// Catalog positions of the set bits of `bits`, ascending.
pub fn subset_indices(bits: u64, n: usize) -> Vec<usize> {
    (0..n).filter(|&j| (bits >> j) & 1 == 1).collect()
}
