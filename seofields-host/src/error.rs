//! Error types for host boundary calls.

use thiserror::Error;

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// Failures reported by the host CMS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The persistence layer refused or failed a single attribute write.
    #[error("write of '{key}' failed: {reason}")]
    WriteFailed { key: String, reason: String },

    /// The content query could not be executed.
    #[error("content query failed: {0}")]
    Query(String),
}
