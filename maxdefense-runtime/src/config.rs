use anyhow::{anyhow, Result};
use maxdefense_utils::read_json_arg;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BUDGET: f64 = 500.0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FilterSettings {
    #[serde(default = "FilterSettings::default_min_defense")]
    pub min_defense: f64,
    #[serde(default = "FilterSettings::default_max_defense")]
    pub max_defense: f64,
    #[serde(default = "FilterSettings::default_max_items")]
    pub max_items: usize,
}

impl FilterSettings {
    fn default_min_defense() -> f64 {
        1.0
    }

    fn default_max_defense() -> f64 {
        2500.0
    }

    fn default_max_items() -> usize {
        6
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_defense: Self::default_min_defense(),
            max_defense: Self::default_max_defense(),
            max_items: Self::default_max_items(),
        }
    }
}

/// Everything needed to run a solver against an armor database.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Settings {
    pub database: PathBuf,
    #[serde(default = "Settings::default_budget")]
    pub budget: f64,
    #[serde(default)]
    pub filter: FilterSettings,
}

impl Settings {
    fn default_budget() -> f64 {
        DEFAULT_BUDGET
    }

    pub fn new(database: impl Into<PathBuf>) -> Self {
        Self {
            database: database.into(),
            budget: DEFAULT_BUDGET,
            filter: FilterSettings::default(),
        }
    }

    /// Loads settings from a json string, a `.json` file or `-` for stdin.
    pub fn load(arg: &str) -> Result<Self> {
        let settings: Settings = read_json_arg(arg)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(anyhow!(
                "budget ({}) must be finite and non-negative",
                self.budget
            ));
        }
        if self.filter.min_defense > self.filter.max_defense {
            return Err(anyhow!(
                "filter.min_defense ({}) exceeds filter.max_defense ({})",
                self.filter.min_defense,
                self.filter.max_defense
            ));
        }
        Ok(())
    }

    pub fn with_overrides(mut self, budget: Option<f64>, max_items: Option<usize>) -> Result<Self> {
        if let Some(budget) = budget {
            self.budget = budget;
        }
        if let Some(max_items) = max_items {
            self.filter.max_items = max_items;
        }
        self.validate()?;
        Ok(self)
    }
}
