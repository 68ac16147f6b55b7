//! Shared fixtures for registry tests.

#![allow(dead_code)]

use seofields_host::{MemoryHost, MemoryQuery, QueryScope};
use seofields_registry::{FieldRegistry, RegistryConfig};
use seofields_types::{AggregateRecord, EntityId, EntityRecord, EntityType, SiteInfo};
use std::sync::Arc;

pub const POST: u64 = 1;
pub const PAGE: u64 = 2;
pub const PRODUCT: u64 = 3;
pub const NEWS: u64 = 7;
pub const EMPTY_TAG: u64 = 8;

pub fn id(raw: u64) -> EntityId {
    EntityId::new(raw)
}

/// A site with one post, one page, one product and a "News" category.
pub fn make_host() -> MemoryHost {
    let mut host = MemoryHost::new(SiteInfo::named("MySite"));
    host.insert_entity(EntityRecord::new(id(POST), "post", "Hello").with_excerpt("First post"));
    host.insert_entity(EntityRecord::new(id(PAGE), "page", "About"));
    host.insert_entity(EntityRecord::new(id(PRODUCT), "product", "Widget"));
    host.insert_aggregate(AggregateRecord::new(id(NEWS), "category", "News"));
    host.insert_aggregate(AggregateRecord::new(id(EMPTY_TAG), "tag", "Unused"));
    host.set_option_entry("wpseo_titles", "title-post", "%%title%% | MySite");
    host
}

/// Content query where the post belongs to the News category.
pub fn make_query() -> MemoryQuery {
    let mut query = MemoryQuery::new();
    query.push_item(id(PAGE), []);
    query.push_item(
        id(POST),
        [QueryScope::new(EntityType::category(), id(NEWS))],
    );
    query
}

pub fn make_registry(host: MemoryHost) -> FieldRegistry<MemoryHost> {
    let config = RegistryConfig {
        custom_types: vec!["product".to_string()],
        ..RegistryConfig::default()
    };
    FieldRegistry::with_builtin_types(Arc::new(host), config)
}
