use thiserror::Error;

/// A track field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("artist must not be empty")]
    EmptyArtist,

    #[error("duration must be greater than zero seconds (got {0})")]
    NonPositiveDuration(i64),

    #[error("duration of {0} seconds is too long")]
    DurationTooLong(i64),

    #[error("{field} must be a whole number (got {input:?})")]
    InvalidNumber { field: &'static str, input: String },
}
