//! Per-type SEO field registry.
//!
//! Binds entity types to the read/update contract of the virtual REST
//! field and dispatches host callbacks to the right resolution path.

use crate::binding::{BindingKind, FieldBinding};
use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::scope::ScopedQuery;
use seofields_host::{Capabilities, ContentQuery, FieldRegistrar, QueryScope, SiteHost};
use seofields_resolver::{FieldResolver, ResolverSettings, TaxonomyResolver};
use seofields_types::{AttributeKey, EntityId, EntityType, SeoMeta};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Outcome of persisting one whitelisted key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteStatus {
    pub key: AttributeKey,
    pub succeeded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WriteStatus {
    fn applied(key: AttributeKey) -> Self {
        Self {
            key,
            succeeded: true,
            error: None,
        }
    }

    fn failed(key: AttributeKey, error: String) -> Self {
        Self {
            key,
            succeeded: false,
            error: Some(error),
        }
    }
}

/// Result of an update: per-key write statuses plus the re-read values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub values: SeoMeta,
    pub writes: Vec<WriteStatus>,
}

impl UpdateOutcome {
    /// True when every attempted write succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.writes.iter().all(|w| w.succeeded)
    }

    pub fn failed_keys(&self) -> Vec<AttributeKey> {
        self.writes
            .iter()
            .filter(|w| !w.succeeded)
            .map(|w| w.key)
            .collect()
    }
}

pub struct FieldRegistry<H: SiteHost> {
    host: Arc<H>,
    config: RegistryConfig,
    settings: ResolverSettings,
    bindings: BTreeMap<EntityType, FieldBinding>,
}

impl<H: SiteHost> FieldRegistry<H> {
    /// Creates an empty registry; no type is bound yet.
    pub fn new(host: Arc<H>, config: RegistryConfig) -> Self {
        let settings = config.resolver_settings();
        Self {
            host,
            config,
            settings,
            bindings: BTreeMap::new(),
        }
    }

    /// Creates a registry with the standard bindings: `post` and `page`
    /// read/write, `category` and `tag` read-only terms, and every
    /// configured custom type read/write. Custom names that collide with a
    /// builtin type are ignored.
    pub fn with_builtin_types(host: Arc<H>, config: RegistryConfig) -> Self {
        let custom_types = config.custom_types.clone();
        let mut registry = Self::new(host, config);
        registry.register_type(EntityType::post(), Capabilities::read_write());
        registry.register_type(EntityType::page(), Capabilities::read_write());
        registry.register_aggregate(EntityType::category());
        registry.register_aggregate(EntityType::tag());
        for custom in custom_types {
            let custom = EntityType::new(custom);
            if registry.binding(&custom).is_some() {
                warn!(entity_type = %custom, "custom type already bound, skipped");
                continue;
            }
            registry.register_type(custom, Capabilities::read_write());
        }
        registry
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    // ================================================================
    // Registration
    // ================================================================

    /// Binds an entity type, replacing any earlier binding of that type.
    /// Returns the replaced binding.
    pub fn register_type(
        &mut self,
        entity_type: EntityType,
        capabilities: Capabilities,
    ) -> Option<FieldBinding> {
        info!(entity_type = %entity_type, ?capabilities, "SEO field bound");
        self.bindings.insert(
            entity_type.clone(),
            FieldBinding::entity(entity_type, capabilities),
        )
    }

    /// Binds a term type as a read-only aggregate.
    pub fn register_aggregate(&mut self, aggregate_type: EntityType) -> Option<FieldBinding> {
        info!(entity_type = %aggregate_type, "SEO field bound (aggregate)");
        self.bindings.insert(
            aggregate_type.clone(),
            FieldBinding::aggregate(aggregate_type),
        )
    }

    pub fn binding(&self, entity_type: &EntityType) -> Option<&FieldBinding> {
        self.bindings.get(entity_type)
    }

    /// All bindings, ordered by type name.
    pub fn bindings(&self) -> impl Iterator<Item = &FieldBinding> {
        self.bindings.values()
    }

    /// Declares the virtual field on the host for every bound type.
    pub fn install(&self, registrar: &mut dyn FieldRegistrar) {
        for binding in self.bindings.values() {
            registrar.register_field(
                &binding.entity_type,
                &self.config.field_name,
                binding.capabilities,
            );
        }
        info!(
            field = %self.config.field_name,
            types = self.bindings.len(),
            "SEO field installed on host"
        );
    }

    // ================================================================
    // Reads
    // ================================================================

    /// Resolves every attribute of an entity.
    pub fn read(&self, entity_id: EntityId, entity_type: &EntityType) -> RegistryResult<SeoMeta> {
        let binding = self.bound(entity_type, BindingKind::Entity)?;
        if !binding.capabilities.readable {
            return Err(RegistryError::NotReadable(entity_type.clone()));
        }
        Ok(self.resolver().resolve_all(entity_id, entity_type))
    }

    /// Resolves one attribute named by its wire or field name.
    pub fn read_key(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        key: &str,
    ) -> RegistryResult<String> {
        let binding = self.bound(entity_type, BindingKind::Entity)?;
        if !binding.capabilities.readable {
            return Err(RegistryError::NotReadable(entity_type.clone()));
        }
        Ok(self.resolver().resolve_named(entity_id, entity_type, key)?)
    }

    /// Resolves a term's title and description through its first member item.
    ///
    /// `query` is narrowed to the term only while resolving; its previous
    /// scope is back in place when this returns, on success or error.
    pub fn read_aggregate<Q: ContentQuery + ?Sized>(
        &self,
        query: &mut Q,
        aggregate_id: EntityId,
        aggregate_type: &EntityType,
    ) -> RegistryResult<SeoMeta> {
        self.bound(aggregate_type, BindingKind::Aggregate)?;

        let representative = {
            let scoped = ScopedQuery::narrow(
                query,
                QueryScope::new(aggregate_type.clone(), aggregate_id),
            );
            scoped.current_item()?
        };
        if representative.is_none() {
            debug!(aggregate_id = %aggregate_id, aggregate_type = %aggregate_type, "no items in term");
        }

        Ok(TaxonomyResolver::new(&*self.host, &self.settings).resolve(
            aggregate_type,
            aggregate_id,
            representative,
        ))
    }

    /// Host read callback: dispatches on the binding kind of `entity_type`.
    pub fn read_field<Q: ContentQuery + ?Sized>(
        &self,
        query: &mut Q,
        id: EntityId,
        entity_type: &EntityType,
    ) -> RegistryResult<SeoMeta> {
        let binding = self
            .binding(entity_type)
            .ok_or_else(|| RegistryError::UnregisteredType(entity_type.clone()))?;
        match binding.kind {
            BindingKind::Entity => self.read(id, entity_type),
            BindingKind::Aggregate => self.read_aggregate(query, id, entity_type),
        }
    }

    // ================================================================
    // Updates
    // ================================================================

    /// Persists whitelisted attributes and returns the re-resolved state.
    ///
    /// Empty names and names outside the whitelist are skipped. A failed
    /// write is reported in [`UpdateOutcome::writes`] and does not stop the
    /// remaining keys; nothing already written is rolled back.
    pub fn update<I, K, V>(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        proposed: I,
    ) -> RegistryResult<UpdateOutcome>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let binding = self.bound(entity_type, BindingKind::Entity)?;
        if !binding.capabilities.writable {
            return Err(RegistryError::NotWritable(entity_type.clone()));
        }
        // The outcome carries re-read values, so an unreadable binding is
        // rejected before anything is written.
        if !binding.capabilities.readable {
            return Err(RegistryError::NotReadable(entity_type.clone()));
        }

        let mut writes = Vec::new();
        for (name, value) in proposed {
            let name = name.as_ref();
            if name.is_empty() {
                debug!(entity_id = %entity_id, "skipping empty attribute name");
                continue;
            }
            let Some(key) = AttributeKey::from_wire_name(name) else {
                debug!(entity_id = %entity_id, attribute = name, "ignoring non-whitelisted attribute");
                continue;
            };

            let storage_key = key.storage_key(&self.settings.meta_key_prefix);
            match self.host.set_attribute(entity_id, &storage_key, value.as_ref()) {
                Ok(()) => writes.push(WriteStatus::applied(key)),
                Err(e) => {
                    warn!(entity_id = %entity_id, key = %key, "SEO attribute write failed: {}", e);
                    writes.push(WriteStatus::failed(key, e.to_string()));
                }
            }
        }

        let values = self.read(entity_id, entity_type)?;
        Ok(UpdateOutcome { values, writes })
    }

    /// [`Self::update`] for a JSON request body.
    ///
    /// Strings are stored as-is, numbers and booleans in their JSON text
    /// form, `null` as the empty string. Arrays and objects are skipped.
    pub fn update_json(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        body: &serde_json::Map<String, Value>,
    ) -> RegistryResult<UpdateOutcome> {
        let proposed = body.iter().filter_map(|(name, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => String::new(),
                Value::Array(_) | Value::Object(_) => {
                    debug!(attribute = %name, "skipping non-scalar attribute value");
                    return None;
                }
            };
            Some((name.as_str(), text))
        });
        self.update(entity_id, entity_type, proposed)
    }

    fn resolver(&self) -> FieldResolver<'_, H> {
        FieldResolver::new(&*self.host, &self.settings)
    }

    fn bound(&self, entity_type: &EntityType, expected: BindingKind) -> RegistryResult<&FieldBinding> {
        let binding = self
            .binding(entity_type)
            .ok_or_else(|| RegistryError::UnregisteredType(entity_type.clone()))?;
        if binding.kind != expected {
            return Err(RegistryError::KindMismatch {
                entity_type: entity_type.clone(),
                expected,
            });
        }
        Ok(binding)
    }
}
