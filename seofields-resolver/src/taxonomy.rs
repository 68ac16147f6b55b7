//! Resolution path for aggregates (categories, tags).
//!
//! Terms have no per-entity attribute store. Their overrides live in one
//! option keyed `<type>/<id>/wpseo_<field>`, their templates in the titles
//! option under `<field>-tax-<type>`, and templates are filled from the
//! term plus a representative item chosen by the content query.

use crate::chain::ResolverSettings;
use crate::vars::{Variables, substitute};
use seofields_host::SiteHost;
use seofields_types::{AggregateRecord, AttributeKey, EntityId, EntityType, SeoMeta};

/// Returns the aggregate key set with every value empty.
pub fn empty_aggregate_meta() -> SeoMeta {
    AttributeKey::AGGREGATE
        .into_iter()
        .map(|key| (key, String::new()))
        .collect()
}

pub struct TaxonomyResolver<'a, H: SiteHost + ?Sized> {
    host: &'a H,
    settings: &'a ResolverSettings,
}

impl<'a, H: SiteHost + ?Sized> TaxonomyResolver<'a, H> {
    pub fn new(host: &'a H, settings: &'a ResolverSettings) -> Self {
        Self { host, settings }
    }

    /// Resolves title and description of a term in the context of
    /// `representative`. With no representative every value is empty.
    pub fn resolve(
        &self,
        aggregate_type: &EntityType,
        aggregate_id: EntityId,
        representative: Option<EntityId>,
    ) -> SeoMeta {
        let Some(representative) = representative else {
            return empty_aggregate_meta();
        };

        let aggregate = self.host.aggregate(aggregate_type, aggregate_id);
        let entity = self.host.entity(representative);
        let entity_type = entity
            .as_ref()
            .map(|e| e.entity_type.clone())
            .unwrap_or_else(EntityType::post);

        let mut vars = Variables::for_entity(&self.host.site(), &entity_type, entity.as_ref());
        if let Some(aggregate) = &aggregate {
            vars.add_aggregate(aggregate);
        }

        let overrides = self.host.get_option(&self.settings.taxonomy_option);
        let templates = self.host.get_option(&self.settings.titles_option);

        AttributeKey::AGGREGATE
            .into_iter()
            .map(|key| {
                let field = key.field_name();
                let stored = overrides
                    .get(&format!("{aggregate_type}/{aggregate_id}/wpseo_{field}"))
                    .filter(|v| !v.is_empty());
                let template = templates
                    .get(&format!("{field}-tax-{aggregate_type}"))
                    .filter(|t| !t.is_empty());
                let chosen = match stored.or(template) {
                    Some(text) => text.clone(),
                    None => native_default(key, aggregate.as_ref()),
                };
                (key, substitute(&chosen, &vars))
            })
            .collect()
    }
}

fn native_default(key: AttributeKey, aggregate: Option<&AggregateRecord>) -> String {
    match (key, aggregate) {
        (AttributeKey::Title, Some(term)) => term.name.clone(),
        _ => String::new(),
    }
}
