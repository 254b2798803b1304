use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::objective::ObjectiveWeights;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Heuristic,
    Exact,
}

/// Single explicit configuration object threaded through the run pipeline,
/// built from either CLI flags or a TOML config file and validated before
/// the main loop starts.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct RunConfig {
    /// Must be even.
    pub population_size: usize,
    pub generations: usize,
    /// In `[0, 1]`.
    pub mutation_rate: f64,
    /// 0 disables checkpointing.
    #[serde(default)]
    pub saving_every: usize,
    #[serde(default)]
    pub population_file: Option<PathBuf>,
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
    pub output_dir: PathBuf,
    #[serde(default)]
    pub weights: ObjectiveWeights,
    #[serde(default)]
    pub backend: SolverBackend,
    /// Wall-clock budget for the exact backend.
    #[serde(default = "default_exact_time_limit_secs")]
    pub exact_time_limit_secs: u64,
    pub seed: u64,
}

fn default_exact_time_limit_secs() -> u64 {
    60
}

impl Default for SolverBackend {
    fn default() -> Self {
        SolverBackend::Heuristic
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), crate::error::ScheduleError> {
        if self.population_size % 2 != 0 {
            return Err(crate::error::ScheduleError::OddPopulationSize(
                self.population_size,
            ));
        }
        Ok(())
    }
}
