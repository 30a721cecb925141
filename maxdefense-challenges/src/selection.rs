use crate::armor::{sum_armor, ArmorItem};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const TOTAL_TOLERANCE: f64 = 1e-9;

/// A subset of a catalog chosen by one of the solvers.
///
/// `indices[k]` is the catalog position of `items[k]`. The totals are always
/// the aggregate of exactly `items`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub indices: Vec<usize>,
    pub items: Vec<ArmorItem>,
    pub total_cost: f64,
    pub total_defense: f64,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from catalog positions, keeping the given order.
    ///
    /// Panics if an index is out of range for `catalog`.
    pub fn from_indices(catalog: &[ArmorItem], indices: Vec<usize>) -> Self {
        let items: Vec<ArmorItem> = indices.iter().map(|&i| catalog[i].clone()).collect();
        let (total_cost, total_defense) = sum_armor(&items);
        Self {
            indices,
            items,
            total_cost,
            total_defense,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks that this selection is a feasible subset of `catalog` under
    /// `budget` and that its totals are consistent with its items.
    pub fn verify(&self, catalog: &[ArmorItem], budget: f64) -> Result<()> {
        if self.indices.len() != self.items.len() {
            return Err(anyhow!(
                "Selection has {} indices but {} items",
                self.indices.len(),
                self.items.len()
            ));
        }
        let unique: HashSet<usize> = self.indices.iter().cloned().collect();
        if unique.len() != self.indices.len() {
            return Err(anyhow!("Duplicate items selected."));
        }
        for (&index, item) in self.indices.iter().zip(&self.items) {
            match catalog.get(index) {
                None => return Err(anyhow!("Item ({}) is out of bounds", index)),
                Some(expected) if expected != item => {
                    return Err(anyhow!(
                        "Item ({}) is '{}' in the catalog but '{}' in the selection",
                        index,
                        expected.description(),
                        item.description()
                    ))
                }
                Some(_) => {}
            }
        }

        let (total_cost, total_defense) = sum_armor(&self.items);
        if !approx_eq(total_cost, self.total_cost) {
            return Err(anyhow!(
                "Total cost ({}) does not match the items ({})",
                self.total_cost,
                total_cost
            ));
        }
        if !approx_eq(total_defense, self.total_defense) {
            return Err(anyhow!(
                "Total defense ({}) does not match the items ({})",
                self.total_defense,
                total_defense
            ));
        }
        if total_cost > budget {
            return Err(anyhow!(
                "Total cost ({}) exceeded budget ({})",
                total_cost,
                budget
            ));
        }
        Ok(())
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TOTAL_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
