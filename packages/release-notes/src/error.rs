//! Typed errors for the release-notes library.
//!
//! The binary wraps these in `anyhow`; the library keeps them concrete so
//! callers can tell a failed read from a failed write.

use thiserror::Error;

use crate::stdio::Endpoint;

/// Errors that can occur while reading a changelog or writing notes.
#[derive(Debug, Error)]
pub enum NotesError {
    /// Changelog could not be read
    #[error("failed to read changelog from {endpoint}")]
    Read {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },

    /// Notes could not be written
    #[error("failed to write release notes to {endpoint}")]
    Write {
        endpoint: Endpoint,
        #[source]
        source: std::io::Error,
    },
}

impl NotesError {
    /// The endpoint the failing operation was talking to.
    pub fn endpoint(&self) -> &Endpoint {
        match self {
            NotesError::Read { endpoint, .. } | NotesError::Write { endpoint, .. } => endpoint,
        }
    }
}

/// Result type alias for release-notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;
