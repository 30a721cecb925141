use anyhow::Result;
use maxdefense_challenges::{ArmorItem, Selection};
use std::{fmt, str::FromStr};

pub mod exhaustive;
pub use exhaustive::{
    check_exhaustive_size, exhaustive_max_defense, subset_indices, MAX_EXHAUSTIVE_ITEMS,
};
pub mod greedy;
pub use greedy::greedy_max_defense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Greedy,
    Exhaustive,
}

impl Strategy {
    pub fn solve(&self, armors: &[ArmorItem], total_cost: f64) -> Result<Selection> {
        match self {
            Strategy::Greedy => Ok(greedy_max_defense(armors, total_cost)),
            Strategy::Exhaustive => exhaustive_max_defense(armors, total_cost),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::Exhaustive => "exhaustive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "greedy" => Ok(Strategy::Greedy),
            "exhaustive" => Ok(Strategy::Exhaustive),
            _ => Err(anyhow::anyhow!("Unknown strategy '{}'", s)),
        }
    }
}
