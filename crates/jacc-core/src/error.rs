//! Error types for the college data core.

use thiserror::Error;

/// Result type alias for provider, tool, and config operations.
pub type JaccResult<T> = Result<T, JaccError>;

/// Which collection rejected a duplicate insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Assignment,
    Reminder,
}

impl RecordKind {
    fn duplicate_message(&self) -> &'static str {
        match self {
            Self::Assignment => "Duplicate assignment: An assignment with the same title, subject, and due date already exists.",
            Self::Reminder => "Duplicate reminder: A reminder with the same title and date already exists.",
        }
    }
}

/// Errors surfaced to callers of the data provider and the tool layer.
///
/// Persistence failures never appear here: the adapter recovers from them locally.
#[derive(Error, Debug)]
pub enum JaccError {
    /// Insertion would violate the collection's uniqueness invariant.
    #[error("{}", .kind.duplicate_message())]
    DuplicateEntry { kind: RecordKind },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid tool parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JaccError {
    /// True for the one error class expected to reach the user as a rejected submission.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateEntry { .. })
    }
}

/// Errors from a key-value backend. Only the persistence adapter sees these.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sled error: {0}")]
    Sled(#[from] sled::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}
