use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ids::TeacherName;

/// Kept as opaque enum keys; the source data uses language-localized labels
/// for these ("wykład", "ćwiczenia", ...) which are mapped in at load time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClassType {
    Lecture,
    Exercise,
    Lab,
    Project,
    Seminar,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, ToSchema, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomCategory {
    SmallLecture,
    Exercise,
    SpecLab,
    CompLab,
    Seminar,
}

/// Fixed class-type -> allowed room-category table.
impl ClassType {
    pub fn allowed_room_categories(self) -> &'static [RoomCategory] {
        use RoomCategory::*;
        match self {
            ClassType::Lecture => &[SmallLecture],
            ClassType::Exercise => &[Exercise],
            ClassType::Lab => &[SpecLab, CompLab],
            ClassType::Project => &[SpecLab, CompLab, Exercise],
            ClassType::Seminar => &[Seminar, SmallLecture],
        }
    }
}

/// One entry of the merged course data input file, course-code keyed.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct CourseRecord {
    pub course_name: String,
    pub field: String,
    pub degree: String,
    pub class_type: ClassType,
    #[serde(default)]
    pub lecturers: Vec<TeacherName>,
}
