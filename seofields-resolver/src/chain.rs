//! The per-entity fallback chain.
//!
//! For one (entity, key) pair the effective value comes from the first
//! non-empty source among:
//! 1. the entity's stored override (`<prefix>yoast_wpseo_<field>`)
//! 2. the type template (`<field>-<entity type>` in the titles option)
//! 3. the hard default: native title for `title`, empty for everything else
//!
//! The chosen text then goes through placeholder substitution.
//! "Non-empty" is a length test: an override of `" "` still wins.

use crate::error::ResolveError;
use crate::vars::{Variables, substitute};
use seofields_host::SiteHost;
use seofields_types::{AttributeKey, EntityId, EntityRecord, EntityType, SeoMeta};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Override,
    Template,
    Default,
}

impl ValueSource {
    /// Position in the chain, starting at 1.
    pub fn step(&self) -> u8 {
        match self {
            Self::Override => 1,
            Self::Template => 2,
            Self::Default => 3,
        }
    }
}

/// A resolved value together with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub value: String,
    pub source: ValueSource,
}

/// Host naming conventions the resolver reads through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSettings {
    /// Namespace prefix in front of stored attribute keys.
    pub meta_key_prefix: String,
    /// Option holding type-level templates.
    pub titles_option: String,
    /// Option holding per-term overrides.
    pub taxonomy_option: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            meta_key_prefix: "_".to_string(),
            titles_option: "wpseo_titles".to_string(),
            taxonomy_option: "wpseo_taxonomy_meta".to_string(),
        }
    }
}

/// Resolves effective SEO values for entities of a host.
pub struct FieldResolver<'a, H: SiteHost + ?Sized> {
    host: &'a H,
    settings: &'a ResolverSettings,
}

impl<'a, H: SiteHost + ?Sized> FieldResolver<'a, H> {
    pub fn new(host: &'a H, settings: &'a ResolverSettings) -> Self {
        Self { host, settings }
    }

    /// Returns the effective value of `key` for the entity.
    ///
    /// Unknown entities resolve through the same chain with no native
    /// values, which usually yields `""`.
    pub fn resolve(&self, entity_id: EntityId, entity_type: &EntityType, key: AttributeKey) -> String {
        self.resolve_with_source(entity_id, entity_type, key).value
    }

    /// Like [`Self::resolve`], for callers holding the key as a string.
    pub fn resolve_named(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        key: &str,
    ) -> Result<String, ResolveError> {
        let key: AttributeKey = key
            .parse()
            .map_err(|_| ResolveError::UnsupportedKey(key.to_string()))?;
        Ok(self.resolve(entity_id, entity_type, key))
    }

    /// Resolves `key` and reports which step of the chain supplied it.
    pub fn resolve_with_source(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        key: AttributeKey,
    ) -> Resolution {
        let entity = self.host.entity(entity_id);
        let vars = Variables::for_entity(&self.host.site(), entity_type, entity.as_ref());
        self.resolve_in(entity_id, entity_type, key, entity.as_ref(), &vars)
    }

    /// Resolves every key of the set for one entity.
    pub fn resolve_all(&self, entity_id: EntityId, entity_type: &EntityType) -> SeoMeta {
        let entity = self.host.entity(entity_id);
        let vars = Variables::for_entity(&self.host.site(), entity_type, entity.as_ref());
        AttributeKey::ALL
            .into_iter()
            .map(|key| {
                let resolution = self.resolve_in(entity_id, entity_type, key, entity.as_ref(), &vars);
                (key, resolution.value)
            })
            .collect()
    }

    fn resolve_in(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        key: AttributeKey,
        entity: Option<&EntityRecord>,
        vars: &Variables,
    ) -> Resolution {
        let (template, source) = self.select(entity_id, entity_type, key, entity);
        trace!(entity_id = %entity_id, key = %key, ?source, "resolved attribute");
        Resolution {
            value: substitute(&template, vars),
            source,
        }
    }

    fn select(
        &self,
        entity_id: EntityId,
        entity_type: &EntityType,
        key: AttributeKey,
        entity: Option<&EntityRecord>,
    ) -> (String, ValueSource) {
        let stored = self
            .host
            .get_attribute(entity_id, &key.storage_key(&self.settings.meta_key_prefix));
        if let Some(value) = stored.filter(|v| !v.is_empty()) {
            return (value, ValueSource::Override);
        }

        let template_key = format!("{}-{}", key.field_name(), entity_type);
        let template = self
            .host
            .get_option(&self.settings.titles_option)
            .remove(&template_key);
        if let Some(template) = template.filter(|t| !t.is_empty()) {
            return (template, ValueSource::Template);
        }

        let fallback = match (key, entity) {
            (AttributeKey::Title, Some(entity)) => entity.title.clone(),
            _ => String::new(),
        };
        (fallback, ValueSource::Default)
    }
}
