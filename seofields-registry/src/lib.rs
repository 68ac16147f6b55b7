//! Registration and dispatch of the SEO REST field.
//!
//! A [`FieldRegistry`] binds entity types to the field's read/update
//! contract:
//! - entity types (posts, pages, custom types) read through the per-entity
//!   fallback chain and accept whitelisted writes
//! - aggregate types (categories, tags) are read-only and resolve through a
//!   representative item, with the shared content query narrowed only for
//!   the duration of the call ([`ScopedQuery`])
//!
//! Updates report a [`WriteStatus`] per whitelisted key instead of hiding
//! persistence failures, then re-read so callers see effective values.

mod binding;
mod config;
mod error;
mod registry;
mod scope;

pub use binding::{BindingKind, FieldBinding};
pub use config::RegistryConfig;
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use registry::{FieldRegistry, UpdateOutcome, WriteStatus};
pub use scope::ScopedQuery;
