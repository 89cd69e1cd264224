//! Error types for the recoverable failure modes of the navigator.
//!
//! Content that is not ready yet is not an error: it is an empty heading list, and the
//! lifecycle keeps waiting. The variants here are the conditions a caller may want to report
//! before degrading to "no panel" or "empty base path".

use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced by document loading and location parsing.
pub enum TocError {
    /// The location string was neither an absolute URL nor a bare fragment.
    #[error("malformed location {location:?}: {reason}")]
    MalformedLocation {
        /// The location as supplied by the host.
        location: String,
        /// Why it could not be interpreted.
        reason: String,
    },
    /// The tree-sitter grammar could not be loaded or the heading query is invalid.
    #[error("parser setup failed: {0}")]
    Parser(String),
    /// Reading a document from disk failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TocError>;
