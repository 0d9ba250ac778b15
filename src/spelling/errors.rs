use thiserror::Error;

use crate::validation::WordInputError;

/// Errors that can arise while running a practice session or touching its stores.
#[derive(Debug, Error)]
pub enum SpellingError {
    /// Wrapper around IO errors (data directory creation, file locks, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON serialization and deserialization errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected word or category input from the word-management surface.
    #[error("invalid word input: {0}")]
    InvalidWord(#[from] WordInputError),

    /// Returned when addressing a word id that is not in the repository.
    #[error("word not found: {0}")]
    WordNotFound(String),

    /// The repository holds no words at all, so no round can be presented.
    #[error("no words available; add words first")]
    EmptyRepository,

    /// Settings outside the supported range (e.g. max attempts not in 2..=5).
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, SpellingError>;
