//! Effective-value resolution for SEO attributes.
//!
//! [`FieldResolver`] walks the per-entity fallback chain (stored override,
//! type template, native default) and fills `%%name%%` placeholders from the
//! entity's live values. [`TaxonomyResolver`] does the same for terms, which
//! have no per-entity store and are resolved through a representative item.
//!
//! Resolution never fails: every path ends in a string, possibly empty.

mod chain;
mod error;
mod taxonomy;
mod vars;

pub use chain::{FieldResolver, Resolution, ResolverSettings, ValueSource};
pub use error::ResolveError;
pub use taxonomy::{TaxonomyResolver, empty_aggregate_meta};
pub use vars::{Variables, substitute};
