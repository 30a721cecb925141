use crate::armor::{ArmorItem, Catalog};
use tracing::debug;

/// Keeps the first `max_items` armors whose defense lies within
/// `[min_defense, max_defense]`, in source order.
///
/// Used to drop worthless armor and to bound the input of the exhaustive
/// solver.
pub fn filter_armor_vector(
    source: &[ArmorItem],
    min_defense: f64,
    max_defense: f64,
    max_items: usize,
) -> Catalog {
    let filtered: Catalog = source
        .iter()
        .filter(|armor| armor.defense() >= min_defense && armor.defense() <= max_defense)
        .take(max_items)
        .cloned()
        .collect();
    debug!(
        source = source.len(),
        kept = filtered.len(),
        min_defense,
        max_defense,
        max_items,
        "filtered armor"
    );
    filtered
}
