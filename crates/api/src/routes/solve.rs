use crate::state::AppState;
use axum::{extract::State, Json};
use types::SolveRequest;
use utoipa::ToSchema;

#[derive(serde::Serialize, ToSchema)]
pub struct JobCreated {
    pub jobId: String,
    pub status: &'static str,
}

#[utoipa::path(
        post,
        path = "/v1/solve",
        request_body = SolveRequest,
        responses((status = 200, description = "Job enqueued", body = JobCreated))
    )]
pub async fn solve(
    State(state): State<AppState>,
    Json(request): Json<SolveRequest>,
) -> Json<JobCreated> {
    let id = state.jobs.enqueue(request);
    Json(JobCreated {
        jobId: id.0,
        status: "queued",
    })
}
