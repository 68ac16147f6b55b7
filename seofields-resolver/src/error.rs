//! Error types for attribute resolution.

use thiserror::Error;

/// Resolution itself never fails; only naming a key outside the set does.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unsupported attribute key: {0}")]
    UnsupportedKey(String),
}
