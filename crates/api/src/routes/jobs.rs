use crate::state::AppState;
use axum::extract::{Path, State};
use axum::Json;
use types::SolveOutcome;

#[utoipa::path(
        get,
        path = "/v1/jobs/{id}",
        params(("id" = String, Path, description = "Job ID")),
        responses((status = 200, description = "Job status", body = jobs::JobStatus))
    )]
pub async fn status(State(state): State<AppState>, Path(id): Path<String>) -> Json<serde_json::Value> {
    let st = state.jobs.get(&id);
    Json(match st {
        None => serde_json::json!({"status": "not_found"}),
        Some(s) => serde_json::to_value(s).unwrap(),
    })
}

#[utoipa::path(
        get,
        path = "/v1/jobs/{id}/result",
        params(("id" = String, Path, description = "Job ID")),
        responses(
            (status = 200, description = "Solve outcome (if ready)", body = SolveOutcome)
        )
    )]
pub async fn result(State(state): State<AppState>, Path(id): Path<String>) -> Json<serde_json::Value> {
    let st = state.jobs.get(&id);
    Json(match st {
        Some(jobs::JobStatus::Done { outcome }) => serde_json::to_value(outcome).unwrap(),
        Some(_) => serde_json::json!({"status": "not_ready"}),
        None => serde_json::json!({"status": "not_found"}),
    })
}
