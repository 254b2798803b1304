use std::sync::Arc;

use async_trait::async_trait;
use jobs::InMemJobs;
use solver_heur::GaSolver;
use solver_milp::ExactSolver;
use types::{SolveOutcome, SolveRequest, Solver, SolverBackend};

#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<InMemJobs<DispatchSolver>>,
}

/// Picks the heuristic or exact backend per request, based on
/// `RunConfig::backend`, same seam the run controller dispatches on.
#[derive(Clone)]
pub struct DispatchSolver {
    heur: Arc<GaSolver>,
    exact: Arc<ExactSolver>,
}

impl DispatchSolver {
    pub fn new() -> Self {
        Self { heur: Arc::new(GaSolver::new()), exact: Arc::new(ExactSolver::new()) }
    }
}

#[async_trait]
impl Solver for DispatchSolver {
    async fn solve(&self, request: SolveRequest) -> anyhow::Result<SolveOutcome> {
        match request.config.backend {
            SolverBackend::Heuristic => self.heur.solve(request).await,
            SolverBackend::Exact => self.exact.solve(request).await,
        }
    }
}

impl AppState {
    pub fn new_default() -> Self {
        let jobs = InMemJobs::new(DispatchSolver::new());
        Self { jobs: Arc::new(jobs) }
    }
}
