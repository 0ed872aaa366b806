use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use knapsack_rs::solvers::Strategy;
use knapsack_rs::util::SolverConfig;
use serde::{Deserialize, Serialize};

/// Configuration of the study plan optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StudyPlanConfig {
    /// Study time budget in hours, used when neither the instance nor the command line define one
    pub capacity: f64,
    /// Strategy used to select the topics
    pub strategy: Strategy,
    /// Configuration of the solvers
    #[serde(default)]
    pub solver: SolverConfig,
}

impl Default for StudyPlanConfig {
    fn default() -> Self {
        Self {
            capacity: 6.0,
            strategy: Strategy::DynamicProgramming,
            solver: SolverConfig::default(),
        }
    }
}

impl StudyPlanConfig {
    /// Reads a config from a JSON file, missing fields fall back to their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("could not open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("incorrect config file format: {}", path.display()))
    }
}
