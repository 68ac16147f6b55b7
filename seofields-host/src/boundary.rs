//! Interfaces the host CMS provides.
//!
//! Nothing here is implemented by the field engine itself: persistence,
//! option storage, native entity data and the content query all belong to
//! the host. Adapters implement these traits; [`crate::MemoryHost`] and
//! [`crate::MemoryQuery`] are the in-process implementations.

use crate::error::HostResult;
use seofields_types::{AggregateRecord, EntityId, EntityRecord, EntityType, SiteInfo};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-entity attribute persistence.
pub trait MetaStore {
    /// Returns the stored value, or `None` when nothing is stored.
    fn get_attribute(&self, entity_id: EntityId, key: &str) -> Option<String>;

    /// Persists one value. A failure affects only this key.
    fn set_attribute(&self, entity_id: EntityId, key: &str, value: &str) -> HostResult<()>;
}

/// Global configuration options (each option is a string → string map).
pub trait OptionStore {
    /// Returns the named option, or an empty map when it is not set.
    fn get_option(&self, name: &str) -> HashMap<String, String>;
}

/// Read access to native entity, aggregate and site attributes.
pub trait EntityAccessor {
    fn entity(&self, entity_id: EntityId) -> Option<EntityRecord>;

    fn aggregate(&self, aggregate_type: &EntityType, aggregate_id: EntityId) -> Option<AggregateRecord>;

    fn site(&self) -> SiteInfo;
}

/// Everything the resolver reads from the host.
pub trait SiteHost: MetaStore + OptionStore + EntityAccessor {}

impl<T: MetaStore + OptionStore + EntityAccessor + ?Sized> SiteHost for T {}

/// Narrowing of the content query to the members of one aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryScope {
    pub aggregate_type: EntityType,
    pub aggregate_id: EntityId,
}

impl QueryScope {
    pub fn new(aggregate_type: EntityType, aggregate_id: EntityId) -> Self {
        Self {
            aggregate_type,
            aggregate_id,
        }
    }
}

/// The host's "current content query": a scope plus the item it selects.
///
/// The scope is shared state. Callers that narrow it must restore the
/// previous scope when done, whatever the outcome.
pub trait ContentQuery {
    /// Returns the active scope (`None` = unrestricted main query).
    fn scope(&self) -> Option<QueryScope>;

    fn set_scope(&mut self, scope: Option<QueryScope>);

    /// Returns the first item matched by the active scope, if any.
    fn current_item(&self) -> HostResult<Option<EntityId>>;
}

/// Read/write capability flags of a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capabilities {
    pub readable: bool,
    pub writable: bool,
}

impl Capabilities {
    pub const fn read_write() -> Self {
        Self {
            readable: true,
            writable: true,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            readable: true,
            writable: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::read_write()
    }
}

/// The host API's hook for declaring a virtual field on an entity type.
///
/// The host routes reads (and, when `writable`, updates) of the field back
/// to whoever declared it.
pub trait FieldRegistrar {
    fn register_field(&mut self, entity_type: &EntityType, field_name: &str, capabilities: Capabilities);
}
