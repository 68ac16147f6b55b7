//! Host CMS boundary for the SEO REST fields.
//!
//! The field engine never owns content. It reaches the host through the
//! traits in this crate:
//! - [`MetaStore`]: per-entity attribute reads and writes
//! - [`OptionStore`]: global options holding type-level templates
//! - [`EntityAccessor`]: native entity, term and site attributes
//! - [`ContentQuery`]: the shared "current content query" used for terms
//! - [`FieldRegistrar`]: declaring the virtual REST field per type
//!
//! [`MemoryHost`], [`MemoryQuery`] and [`RecordingRegistrar`] implement them
//! in-process.

mod boundary;
mod error;
mod memory;

pub use boundary::{
    Capabilities, ContentQuery, EntityAccessor, FieldRegistrar, MetaStore, OptionStore, QueryScope,
    SiteHost,
};
pub use error::{HostError, HostResult};
pub use memory::{MemoryHost, MemoryQuery, RecordingRegistrar};
