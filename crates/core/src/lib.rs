pub mod index;
pub mod kernels;
pub mod scoring;

use thiserror::Error;
use types::RawInstance;

pub use index::IndexedInstance;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid instance: {0}")]
    Msg(String),
}

/// Best-effort structural checks beyond what `IndexedInstance::build` already
/// enforces: collects every problem found rather than failing on the first.
pub fn validate(raw: &RawInstance) -> Result<IndexedInstance, ValidationError> {
    let mut errors: Vec<String> = Vec::new();

    if raw.rooms.values().all(|v| v.is_empty()) {
        errors.push("no rooms declared under any category".into());
    }
    for (code, rec) in &raw.courses {
        if rec.lecturers.is_empty() {
            errors.push(format!("course {code} has no lecturers"));
        }
    }

    if !errors.is_empty() {
        return Err(ValidationError::Msg(errors.join("; ")));
    }

    IndexedInstance::build(raw).map_err(|e| ValidationError::Msg(e.to_string()))
}
