use axum::{http::StatusCode, Json};
use sched_core::{validate, ValidationError};
use serde::Serialize;
use types::RawInstance;

#[derive(Serialize, utoipa::ToSchema)]
pub struct ValidationReport {
    pub ok: bool,
    #[serde(default)]
    pub errors: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/v1/validate",
    request_body = RawInstance,
    responses(
    (status = 200, description = "Validation result", body = ValidationReport)
    )
)]
pub async fn validate_handler(Json(inst): Json<RawInstance>) -> (StatusCode, Json<ValidationReport>) {
    match validate(&inst) {
        Ok(_) => (StatusCode::OK, Json(ValidationReport { ok: true, errors: vec![] })),
        Err(ValidationError::Msg(msg)) => {
            let errs = msg.split(';').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect();
            (StatusCode::OK, Json(ValidationReport { ok: false, errors: errs }))
        }
    }
}
