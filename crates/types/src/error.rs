use thiserror::Error;

/// Input-shape errors: all fatal, all detected before the main loop runs.
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("missing input file: {0}")]
    MissingFile(String),

    #[error("malformed JSON in {file}: {source}")]
    MalformedJson {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{kind} {id} references unknown {referent} {target}")]
    UnknownIdentifier {
        kind: &'static str,
        id: String,
        referent: &'static str,
        target: String,
    },

    #[error("num_slots {0} is not divisible by 5")]
    SlotCountNotDivisibleByFive(usize),

    #[error("population size {0} is odd, must be even")]
    OddPopulationSize(usize),

    #[error("loaded population shape mismatch: expected {expected}, found {found}")]
    PopulationShapeMismatch { expected: String, found: String },
}
