use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::error;
use types::{SolveOutcome, SolveRequest, Solver};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
pub struct JobId(pub String);

/// One submitted solve's lifecycle. `Done` carries the outcome regardless
/// of whether it was feasible; callers inspect `SolveOutcome::status`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize, ToSchema)]
#[serde(tag = "status")]
pub enum JobStatus {
    Queued,
    Running,
    Done { outcome: SolveOutcome },
    Failed { message: String },
}

#[derive(Clone)]
pub struct InMemJobs<S: Solver> {
    inner: std::sync::Arc<RwLock<HashMap<String, JobStatus>>>,
    solver: std::sync::Arc<S>,
}

impl<S: Solver> InMemJobs<S> {
    pub fn new(solver: S) -> Self {
        Self {
            inner: Default::default(),
            solver: std::sync::Arc::new(solver),
        }
    }

    pub fn enqueue(&self, request: SolveRequest) -> JobId {
        let id = Uuid::new_v4().to_string();
        self.inner.write().insert(id.clone(), JobStatus::Queued);

        let map = self.inner.clone();
        let solver = self.solver.clone();
        let id_for_task = id.clone();

        tokio::spawn(async move {
            {
                let mut w = map.write();
                w.insert(id_for_task.clone(), JobStatus::Running);
            }
            match solver.solve(request).await {
                Ok(outcome) => {
                    map.write()
                        .insert(id_for_task, JobStatus::Done { outcome });
                }
                Err(e) => {
                    error!(?e, "job failed");
                    map.write().insert(
                        id_for_task,
                        JobStatus::Failed {
                            message: e.to_string(),
                        },
                    );
                }
            }
        });

        JobId(id)
    }

    pub fn get(&self, id: &str) -> Option<JobStatus> {
        self.inner.read().get(id).cloned()
    }
}
