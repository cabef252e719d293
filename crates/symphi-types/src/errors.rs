use thiserror::Error;

/// Domain errors surfaced at the input boundary.
///
/// None of these are retryable: every core operation is deterministic, so
/// retrying with the same input cannot change the outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SymphiError {
    #[error("invalid letter '{0}': only ASCII alphabetic characters are accepted")]
    InvalidLetter(char),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("word must contain at least one letter")]
    EmptyWord,

    #[error("conservation tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),
}
