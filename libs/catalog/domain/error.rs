use thiserror::Error;

/// Missing required field while constructing a domain entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing key")]
    MissingKey,

    #[error("missing sport info")]
    MissingSport,

    #[error("missing competition info")]
    MissingCompetition,

    #[error("missing category info")]
    MissingCategory,

    #[error("missing cutoff time")]
    MissingCutoffTime,
}
