use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("start date is after end date")]
    StartAfterEnd,

    #[error("format {format:?} has unknown verb {verb}")]
    UnknownVerb { format: String, verb: char },

    #[error("format {format:?} ends with an incomplete verb")]
    DanglingPercent { format: String },

    #[error("undefined dates difference mode")]
    EmptyUnitSet,
}

pub type Result<T> = std::result::Result<T, DiffError>;
