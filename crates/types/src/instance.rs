use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CourseRecord, RoomCategory};

/// Merged course data input file: course-code -> record.
pub type CourseData = HashMap<String, CourseRecord>;

/// Class-type -> rooms input file: room-category -> list of room numbers.
pub type RoomCatalog = HashMap<RoomCategory, Vec<String>>;

/// Optional teacher preferences file: teacher-index (stringified) -> slot-index
/// (stringified) -> score in `1..=5`. Kept in raw string-keyed form since it is
/// loaded before indices are assigned; the index builder resolves it against
/// the teacher index vector.
pub type RawPreferences = HashMap<String, HashMap<String, u8>>;

/// The full set of inputs the index builders consume.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, JsonSchema)]
pub struct RawInstance {
    pub courses: CourseData,
    pub rooms: RoomCatalog,
    #[serde(default)]
    pub preferences: Option<RawPreferences>,
    /// Number of time-slots; defaults to the standard 35-slot schedule.
    /// Must be divisible by 5.
    #[serde(default = "crate::slots::default_num_slots")]
    pub num_slots: usize,
}
