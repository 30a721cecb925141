use maxdefense_challenges::{ArmorItem, Selection};
use tracing::debug;

/// Picks armor greedily by defense per gold.
///
/// Each round takes the remaining armor with the strictly highest ratio that
/// still fits in what is left of `total_cost`; on equal ratios the earlier
/// armor wins. Armor with zero defense is never taken. Stops when nothing
/// fits or nothing is left. The selection lists armor in the order picked.
pub fn greedy_max_defense(armors: &[ArmorItem], total_cost: f64) -> Selection {
    let mut todo: Vec<usize> = (0..armors.len()).collect();
    let mut picked = Vec::new();
    let mut result_cost = 0.0;

    while !todo.is_empty() {
        let best = todo
            .iter()
            .enumerate()
            .filter(|&(_, &i)| result_cost + armors[i].cost() <= total_cost)
            .fold(None, |best: Option<(usize, f64)>, (pos, &i)| {
                let ratio = armors[i].ratio();
                if ratio > best.map_or(0.0, |(_, best_ratio)| best_ratio) {
                    Some((pos, ratio))
                } else {
                    best
                }
            });

        let Some((pos, ratio)) = best else {
            break;
        };
        let index = todo.remove(pos);
        result_cost += armors[index].cost();
        picked.push(index);
        debug!(index, ratio, result_cost, "greedy pick");
    }

    let selection = Selection::from_indices(armors, picked);
    debug!(
        num_items = armors.len(),
        picked = selection.len(),
        total_cost = selection.total_cost,
        total_defense = selection.total_defense,
        "greedy search complete"
    );
    selection
}
