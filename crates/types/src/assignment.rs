use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One course's placement: indices into the teacher, room and slot vectors.
/// `None` means the course is unplaced (a generator dead-end or a repair
/// failure, per the hard-constraint-violation path).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq)]
pub struct Placement {
    pub teacher: usize,
    pub room: usize,
    pub slot: usize,
}

/// Sparse representation of one candidate solution: one optional placement
/// per course, in course-index order. Equivalent to the dense `(C,T,R,S)`
/// boolean tensor for every individual this system's own operators can
/// produce, since none of them ever assign a course more than one triple;
/// the literal tensor is only materialized at the checkpoint/`best.json`
/// serialization boundary.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct Individual {
    pub placements: Vec<Option<Placement>>,
}

impl Individual {
    pub fn new(num_courses: usize) -> Self {
        Self {
            placements: vec![None; num_courses],
        }
    }

    pub fn num_unplaced(&self) -> usize {
        self.placements.iter().filter(|p| p.is_none()).count()
    }
}

/// One entry of `best.<ext>`: course-code keyed, human-readable placement.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct BestAssignmentEntry {
    pub course_code: String,
    pub teacher: String,
    pub room: String,
    pub slot: String,
}

/// The full checkpoint payload written by `population.<ext>`: population plus
/// the shape needed to reconstruct the dense tensor on load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    pub num_courses: usize,
    pub num_teachers: usize,
    pub num_rooms: usize,
    pub num_slots: usize,
    pub population: Vec<Individual>,
}

/// `results.json`, written by the exact backend only.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct ExactResults {
    pub objective_value: Option<f64>,
    pub computing_time_seconds: f64,
}
