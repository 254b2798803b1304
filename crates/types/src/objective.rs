use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tagged enumeration of the five soft-objective components. Each kind pairs
/// with a fixed weight and is evaluated in a data-driven loop rather than
/// through dynamic dispatch over component trait objects.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveKind {
    TeacherGaps,
    GroupGaps,
    PreferencePenalty,
    TeacherRoomChanges,
    GroupRoomChanges,
}

impl ObjectiveKind {
    pub const ALL: [ObjectiveKind; 5] = [
        ObjectiveKind::TeacherGaps,
        ObjectiveKind::GroupGaps,
        ObjectiveKind::PreferencePenalty,
        ObjectiveKind::TeacherRoomChanges,
        ObjectiveKind::GroupRoomChanges,
    ];
}

/// Per-component weights for the default fitness formula:
/// `F = 2*teacher_gaps + 2*group_gaps + 1*preference_penalty + 1*teacher_room_changes + 0.3*group_room_changes`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct ObjectiveWeights {
    pub teacher_gaps: f64,
    pub group_gaps: f64,
    pub preference_penalty: f64,
    pub teacher_room_changes: f64,
    pub group_room_changes: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            teacher_gaps: 2.0,
            group_gaps: 2.0,
            preference_penalty: 1.0,
            teacher_room_changes: 1.0,
            group_room_changes: 0.3,
        }
    }
}

impl ObjectiveWeights {
    pub fn weight(&self, kind: ObjectiveKind) -> f64 {
        match kind {
            ObjectiveKind::TeacherGaps => self.teacher_gaps,
            ObjectiveKind::GroupGaps => self.group_gaps,
            ObjectiveKind::PreferencePenalty => self.preference_penalty,
            ObjectiveKind::TeacherRoomChanges => self.teacher_room_changes,
            ObjectiveKind::GroupRoomChanges => self.group_room_changes,
        }
    }
}

/// Per-component raw values (before weighting) plus the combined weighted
/// fitness, returned by the evaluator so callers (logging, `/v1/audit`) can
/// inspect the breakdown instead of only the scalar sum.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct ObjectiveBreakdown {
    pub teacher_gaps: f64,
    pub group_gaps: f64,
    pub preference_penalty: f64,
    pub teacher_room_changes: f64,
    pub group_room_changes: f64,
    pub fitness: f64,
}

impl ObjectiveBreakdown {
    pub fn get(&self, kind: ObjectiveKind) -> f64 {
        match kind {
            ObjectiveKind::TeacherGaps => self.teacher_gaps,
            ObjectiveKind::GroupGaps => self.group_gaps,
            ObjectiveKind::PreferencePenalty => self.preference_penalty,
            ObjectiveKind::TeacherRoomChanges => self.teacher_room_changes,
            ObjectiveKind::GroupRoomChanges => self.group_room_changes,
        }
    }

    pub fn set(&mut self, kind: ObjectiveKind, value: f64) {
        match kind {
            ObjectiveKind::TeacherGaps => self.teacher_gaps = value,
            ObjectiveKind::GroupGaps => self.group_gaps = value,
            ObjectiveKind::PreferencePenalty => self.preference_penalty = value,
            ObjectiveKind::TeacherRoomChanges => self.teacher_room_changes = value,
            ObjectiveKind::GroupRoomChanges => self.group_room_changes = value,
        }
    }

    pub fn weighted_sum(&self, weights: &ObjectiveWeights) -> f64 {
        ObjectiveKind::ALL
            .iter()
            .map(|&k| weights.weight(k) * self.get(k))
            .sum()
    }
}
