//! Error types for recurdate.

use thiserror::Error;

/// Errors that can occur around recurrence expansion.
///
/// Expansion itself never fails; these cover parsing user input,
/// loading configuration and asking a suggester for text.
#[derive(Error, Debug)]
pub enum RecurError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Suggestion error: {0}")]
    Suggestion(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for recurdate operations.
pub type RecurResult<T> = Result<T, RecurError>;
