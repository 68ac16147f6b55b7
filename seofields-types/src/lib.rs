//! Core type definitions for the SEO REST fields.
//!
//! This crate defines the vocabulary shared by the resolver, the registry
//! and host adapters:
//! - [`EntityId`] and [`EntityType`] naming host content
//! - [`AttributeKey`], the closed whitelist of SEO attributes
//! - [`SeoMeta`], the key → effective value mapping returned to clients
//! - native records ([`EntityRecord`], [`AggregateRecord`], [`SiteInfo`])
//!   used for placeholder substitution

mod ids;
mod key;
mod record;

use std::collections::BTreeMap;

pub use ids::{EntityId, EntityType};
pub use key::{AttributeKey, WIRE_PREFIX};
pub use record::{AggregateRecord, EntityRecord, SiteInfo};

/// Effective SEO values keyed by attribute, as returned to REST clients.
pub type SeoMeta = BTreeMap<AttributeKey, String>;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unsupported attribute key: {0}")]
    UnsupportedKey(String),

    #[error("invalid entity id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),
}
