use crate::armor::{ArmorItem, Catalog};
use anyhow::{anyhow, Result};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const ARMOR_KINDS: [&str; 8] = [
    "helmet", "gauntlets", "breastplate", "greaves", "shield", "boots", "cloak", "bracers",
];
const ARMOR_ADJECTIVES: [&str; 6] = ["rusty", "new", "enchanted", "dwarven", "elven", "cursed"];

/// Shape of a randomly generated catalog.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Track {
    pub num_items: usize,
    pub max_cost: f64,
    pub max_defense: f64,
    /// Probability that an item has non-zero defense.
    pub density: f64,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            num_items: 16,
            max_cost: 100.0,
            max_defense: 2500.0,
            density: 0.9,
        }
    }
}

/// Generates a catalog that depends only on `seed` and `track`.
pub fn generate_catalog(seed: u64, track: &Track) -> Result<Catalog> {
    if !(track.max_cost >= 1.0 && track.max_cost.is_finite()) {
        return Err(anyhow!("max_cost ({}) must be at least 1", track.max_cost));
    }
    if !(track.max_defense >= 1.0 && track.max_defense.is_finite()) {
        return Err(anyhow!(
            "max_defense ({}) must be at least 1",
            track.max_defense
        ));
    }
    if !(0.0..=1.0).contains(&track.density) {
        return Err(anyhow!("density ({}) must be within [0, 1]", track.density));
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    (0..track.num_items)
        .map(|i| {
            let adjective = ARMOR_ADJECTIVES[rng.gen_range(0..ARMOR_ADJECTIVES.len())];
            let kind = ARMOR_KINDS[rng.gen_range(0..ARMOR_KINDS.len())];
            let description = format!("{} {} #{}", adjective, kind, i);
            // whole gold pieces and defense points
            let cost = rng.gen_range(1.0..=track.max_cost).round();
            let defense = if rng.gen_bool(track.density) {
                rng.gen_range(1.0..=track.max_defense).round()
            } else {
                0.0
            };
            ArmorItem::new(description, cost, defense)
        })
        .collect()
}
