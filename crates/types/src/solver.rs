use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::assignment::Individual;
use crate::config::RunConfig;
use crate::instance::RawInstance;

/// Outcome taxonomy for the exact backend; returned verbatim. Only `Optimal`
/// and `Feasible` carry an assignment worth persisting.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SolverStatus {
    Optimal,
    Feasible,
    Unknown,
    Infeasible,
}

impl SolverStatus {
    pub fn has_assignment(self) -> bool {
        matches!(self, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct SolveRequest {
    pub instance: RawInstance,
    pub config: RunConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct SolveOutcome {
    pub status: SolverStatus,
    pub best: Option<Individual>,
    pub objective_value: Option<f64>,
    pub computing_time_seconds: f64,
}

/// Common seam between the genetic-algorithm backend and the exact backend,
/// dispatched on by the run controller and the job queue alike.
#[async_trait]
pub trait Solver: Send + Sync + 'static {
    async fn solve(&self, request: SolveRequest) -> anyhow::Result<SolveOutcome>;
}
