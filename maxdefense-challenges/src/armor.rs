use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// A piece of armor that can be bought with gold.
///
/// Items are validated on construction and never change afterwards: the
/// description is non-empty, the cost is a positive finite number of gold and
/// the defense points are finite and non-negative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(try_from = "ArmorItemData")]
pub struct ArmorItem {
    description: String,
    cost: f64,
    defense: f64,
}

#[derive(Deserialize)]
struct ArmorItemData {
    description: String,
    cost: f64,
    defense: f64,
}

impl TryFrom<ArmorItemData> for ArmorItem {
    type Error = anyhow::Error;

    fn try_from(data: ArmorItemData) -> Result<Self> {
        ArmorItem::new(data.description, data.cost, data.defense)
    }
}

impl ArmorItem {
    pub fn new(description: impl Into<String>, cost: f64, defense: f64) -> Result<Self> {
        let description = description.into();
        if description.is_empty() {
            return Err(anyhow!("Armor description must be non-empty"));
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(anyhow!(
                "Armor '{}' has invalid cost ({}); must be positive",
                description,
                cost
            ));
        }
        if !defense.is_finite() || defense < 0.0 {
            return Err(anyhow!(
                "Armor '{}' has invalid defense ({}); must be non-negative",
                description,
                defense
            ));
        }
        Ok(Self {
            description,
            cost,
            defense,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Cost in gold.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn defense(&self) -> f64 {
        self.defense
    }

    /// Defense points bought per unit of gold.
    pub fn ratio(&self) -> f64 {
        self.defense / self.cost
    }
}

/// The candidate armor available for selection, in database order.
pub type Catalog = Vec<ArmorItem>;

/// Total cost and total defense of `armors`. Both are 0 for an empty slice.
pub fn sum_armor<'a, I>(armors: I) -> (f64, f64)
where
    I: IntoIterator<Item = &'a ArmorItem>,
{
    armors
        .into_iter()
        .fold((0.0, 0.0), |(cost, defense), armor| {
            (cost + armor.cost(), defense + armor.defense())
        })
}
