use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use types::{CourseData, RawInstance, RawPreferences, RoomCatalog, ScheduleError};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ScheduleError> {
    let text = fs::read_to_string(path)
        .map_err(|_| ScheduleError::MissingFile(path.display().to_string()))?;
    serde_json::from_str(&text).map_err(|source| ScheduleError::MalformedJson {
        file: path.display().to_string(),
        source,
    })
}

/// Loads the merged course data, room catalog, and optional preferences
/// files into a `RawInstance`, ready for `IndexedInstance::build`.
pub fn load_instance(
    courses_path: &Path,
    rooms_path: &Path,
    preferences_path: Option<&Path>,
    num_slots: usize,
) -> Result<RawInstance, ScheduleError> {
    let courses: CourseData = read_json(courses_path)?;
    let rooms: RoomCatalog = read_json(rooms_path)?;
    let preferences: Option<RawPreferences> = preferences_path.map(read_json).transpose()?;

    Ok(RawInstance {
        courses,
        rooms,
        preferences,
        num_slots,
    })
}
