use axum::Json;
use sched_core::{kernels, scoring, IndexedInstance};
use serde::{Deserialize, Serialize};
use types::{Individual, ObjectiveBreakdown, ObjectiveWeights, RawInstance};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct AuditIn {
    pub instance: RawInstance,
    pub assignment: Individual,
    #[serde(default)]
    pub weights: Option<ObjectiveWeights>,
}

#[derive(Serialize, ToSchema)]
pub struct AuditOut {
    pub feasible: bool,
    pub violations: ViolationCounts,
    pub objective: ObjectiveBreakdown,
}

#[derive(Serialize, ToSchema)]
pub struct ViolationCounts {
    pub room: u64,
    pub teacher: u64,
    pub group: u64,
    pub assignment_count: u64,
    pub teacher_domain: u64,
    pub room_domain: u64,
    pub total: u64,
}

/// Re-checks a submitted assignment against the hard-constraint kernels and
/// the soft-objective evaluator, for callers who solved elsewhere and want an
/// independent audit rather than a rerun.
#[utoipa::path(
    post,
    path = "/v1/audit",
    request_body = AuditIn,
    responses(
        (status = 200, description = "Violation and objective breakdown for the submitted assignment", body = AuditOut)
    )
)]
pub async fn audit(Json(input): Json<AuditIn>) -> Json<AuditOut> {
    let inst = match IndexedInstance::build(&input.instance) {
        Ok(inst) => inst,
        Err(_) => {
            return Json(AuditOut {
                feasible: false,
                violations: ViolationCounts {
                    room: 0,
                    teacher: 0,
                    group: 0,
                    assignment_count: input.assignment.num_unplaced() as u64,
                    teacher_domain: 0,
                    room_domain: 0,
                    total: 0,
                },
                objective: ObjectiveBreakdown::default(),
            });
        }
    };

    let ind = &input.assignment;
    let violations = ViolationCounts {
        room: kernels::room_violations(&inst, ind),
        teacher: kernels::teacher_violations(&inst, ind),
        group: kernels::group_violations(&inst, ind),
        assignment_count: kernels::assignment_count_violations(ind),
        teacher_domain: kernels::teacher_domain_violations(&inst, ind),
        room_domain: kernels::room_domain_violations(&inst, ind),
        total: kernels::total_violations(&inst, ind),
    };

    let weights = input.weights.unwrap_or_default();
    let objective = scoring::evaluate(&inst, ind, &weights);

    Json(AuditOut {
        feasible: violations.total == 0,
        violations,
        objective,
    })
}
