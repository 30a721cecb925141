use anyhow::{Context, Result};
use maxdefense_algorithms::Strategy;
use maxdefense_challenges::{filter_armor_vector, load_armor_database, ArmorItem, Catalog, Selection};
use std::time::{Duration, Instant};
use tracing::info;

pub mod config;
pub use config::*;
pub mod report;
pub use report::*;

/// Outcome of running one strategy over the filtered candidates.
#[derive(Debug, Clone)]
pub struct Run {
    pub strategy: Strategy,
    pub num_candidates: usize,
    pub selection: Selection,
    pub elapsed: Duration,
}

/// Loads the armor database named in `settings` and applies its filter.
pub fn load_candidates(settings: &Settings) -> Result<Catalog> {
    let all_armors = load_armor_database(&settings.database)?;
    let candidates = filter_armor_vector(
        &all_armors,
        settings.filter.min_defense,
        settings.filter.max_defense,
        settings.filter.max_items,
    );
    info!(
        total = all_armors.len(),
        candidates = candidates.len(),
        "selected candidate armor"
    );
    Ok(candidates)
}

/// Runs `strategy`, timing only the solver itself, and checks the result.
pub fn run_strategy(strategy: Strategy, candidates: &[ArmorItem], budget: f64) -> Result<Run> {
    let start = Instant::now();
    let selection = strategy.solve(candidates, budget)?;
    let elapsed = start.elapsed();

    selection
        .verify(candidates, budget)
        .with_context(|| format!("{} produced an invalid selection", strategy))?;
    info!(
        %strategy,
        elapsed_secs = elapsed.as_secs_f64(),
        total_defense = selection.total_defense,
        "solver finished"
    );

    Ok(Run {
        strategy,
        num_candidates: candidates.len(),
        selection,
        elapsed,
    })
}
