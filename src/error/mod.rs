//! Error handling for voter-file helpers.
//!
//! Most of the public helpers are best-effort and never surface these errors
//! directly: malformed records are folded into `Option`/`Ternary` results.
//! The strict parsing entry points return them so callers can report why a
//! record was rejected.

use std::io;

/// Errors produced while interpreting voter-file values
#[derive(Debug, thiserror::Error)]
pub enum VoterFileError {
    /// Birth date is not an 8-digit `YYYYMMDD` calendar date
    #[error("Invalid birth date '{value}': {reason}")]
    InvalidBirthDate {
        /// The raw value that failed to parse
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// Election date matched none of the configured formats
    #[error("Invalid election date '{0}'")]
    InvalidElectionDate(String),

    /// Election type label other than "general" or "primary"
    #[error("Unknown election type '{0}'")]
    UnknownElectionType(String),

    /// Progress arguments that cannot be rendered
    #[error("Invalid progress: {0}")]
    InvalidProgress(String),

    /// Error writing to an output sink
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading a JSON configuration
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl VoterFileError {
    /// Create an invalid birth date error
    pub fn invalid_birth_date(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidBirthDate {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for voter-file operations
pub type Result<T> = std::result::Result<T, VoterFileError>;
