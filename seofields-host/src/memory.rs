//! In-process host: hash maps standing in for the CMS tables.
//!
//! Used by tests and by embedders that keep SEO data outside a CMS.

use crate::boundary::{
    Capabilities, ContentQuery, EntityAccessor, FieldRegistrar, MetaStore, OptionStore, QueryScope,
};
use crate::error::{HostError, HostResult};
use seofields_types::{AggregateRecord, EntityId, EntityRecord, EntityType, SiteInfo};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

type MetaTable = HashMap<EntityId, BTreeMap<String, String>>;

/// Host backed by in-memory maps.
///
/// Attribute writes go through a mutex so the store can be shared by
/// reference while still accepting `set_attribute(&self, ..)`.
#[derive(Debug, Default)]
pub struct MemoryHost {
    meta: Mutex<MetaTable>,
    options: HashMap<String, HashMap<String, String>>,
    entities: HashMap<EntityId, EntityRecord>,
    aggregates: HashMap<(EntityType, EntityId), AggregateRecord>,
    site: SiteInfo,
    rejected_keys: HashSet<String>,
}

impl MemoryHost {
    pub fn new(site: SiteInfo) -> Self {
        Self {
            site,
            ..Self::default()
        }
    }

    pub fn insert_entity(&mut self, entity: EntityRecord) {
        self.entities.insert(entity.id, entity);
    }

    pub fn insert_aggregate(&mut self, aggregate: AggregateRecord) {
        self.aggregates
            .insert((aggregate.aggregate_type.clone(), aggregate.id), aggregate);
    }

    /// Sets one entry of a named option.
    pub fn set_option_entry(&mut self, option: &str, key: impl Into<String>, value: impl Into<String>) {
        self.options
            .entry(option.to_string())
            .or_default()
            .insert(key.into(), value.into());
    }

    /// Makes every subsequent write to `key` fail, for any entity.
    pub fn reject_writes_to(&mut self, key: impl Into<String>) {
        self.rejected_keys.insert(key.into());
    }

    /// Returns every stored key for an entity, sorted.
    pub fn stored_keys(&self, entity_id: EntityId) -> Vec<String> {
        self.meta()
            .get(&entity_id)
            .map(|attrs| attrs.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn meta(&self) -> MutexGuard<'_, MetaTable> {
        self.meta.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetaStore for MemoryHost {
    fn get_attribute(&self, entity_id: EntityId, key: &str) -> Option<String> {
        self.meta()
            .get(&entity_id)
            .and_then(|attrs| attrs.get(key))
            .cloned()
    }

    fn set_attribute(&self, entity_id: EntityId, key: &str, value: &str) -> HostResult<()> {
        if self.rejected_keys.contains(key) {
            return Err(HostError::WriteFailed {
                key: key.to_string(),
                reason: "rejected by store".to_string(),
            });
        }
        self.meta()
            .entry(entity_id)
            .or_default()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl OptionStore for MemoryHost {
    fn get_option(&self, name: &str) -> HashMap<String, String> {
        self.options.get(name).cloned().unwrap_or_default()
    }
}

impl EntityAccessor for MemoryHost {
    fn entity(&self, entity_id: EntityId) -> Option<EntityRecord> {
        self.entities.get(&entity_id).cloned()
    }

    fn aggregate(&self, aggregate_type: &EntityType, aggregate_id: EntityId) -> Option<AggregateRecord> {
        self.aggregates
            .get(&(aggregate_type.clone(), aggregate_id))
            .cloned()
    }

    fn site(&self) -> SiteInfo {
        self.site.clone()
    }
}

/// Content query over an ordered list of items and their aggregate memberships.
#[derive(Debug, Default)]
pub struct MemoryQuery {
    items: Vec<(EntityId, HashSet<QueryScope>)>,
    scope: Option<QueryScope>,
    unavailable: Option<String>,
}

impl MemoryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item belonging to the given aggregates. Order is query order.
    pub fn push_item(&mut self, entity_id: EntityId, memberships: impl IntoIterator<Item = QueryScope>) {
        self.items.push((entity_id, memberships.into_iter().collect()));
    }

    /// Makes `current_item` fail with the given reason.
    pub fn set_unavailable(&mut self, reason: impl Into<String>) {
        self.unavailable = Some(reason.into());
    }
}

impl ContentQuery for MemoryQuery {
    fn scope(&self) -> Option<QueryScope> {
        self.scope.clone()
    }

    fn set_scope(&mut self, scope: Option<QueryScope>) {
        debug!(?scope, "content query scope changed");
        self.scope = scope;
    }

    fn current_item(&self) -> HostResult<Option<EntityId>> {
        if let Some(reason) = &self.unavailable {
            return Err(HostError::Query(reason.clone()));
        }
        let item = self.items.iter().find(|(_, memberships)| match &self.scope {
            Some(scope) => memberships.contains(scope),
            None => true,
        });
        Ok(item.map(|(id, _)| *id))
    }
}

/// Registrar that records declarations, for hosts that wire fields later.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub fields: Vec<(EntityType, String, Capabilities)>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the capabilities declared for `field_name` on `entity_type`.
    pub fn declared(&self, entity_type: &EntityType, field_name: &str) -> Option<Capabilities> {
        self.fields
            .iter()
            .rev()
            .find(|(t, f, _)| t == entity_type && f == field_name)
            .map(|(_, _, caps)| *caps)
    }
}

impl FieldRegistrar for RecordingRegistrar {
    fn register_field(&mut self, entity_type: &EntityType, field_name: &str, capabilities: Capabilities) {
        self.fields
            .push((entity_type.clone(), field_name.to_string(), capabilities));
    }
}
