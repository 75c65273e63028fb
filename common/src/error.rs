use thiserror::Error;

/// Errors from record lookups.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("fixture {name} could not be parsed: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate record id: {0}")]
    DuplicateId(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Data-quality problems found when checking a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("{what} ends before it starts")]
    EndsBeforeStart { what: &'static str },
    #[error("journey step {id} goes back in time (day {day} after day {previous})")]
    DayRegression { id: String, day: u32, previous: u32 },
    #[error("journey has {0} current steps")]
    MultipleCurrentSteps(usize),
    #[error("journey step {id} is {status} on the wrong side of the current step")]
    StepOutOfOrder { id: String, status: &'static str },
}
