use crate::{EntityId, EntityType};
use serde::{Deserialize, Serialize};

/// Native attributes of an entity, as the host reports them.
///
/// These feed placeholder substitution; they are never written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub entity_type: EntityType,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
}

impl EntityRecord {
    pub fn new(id: impl Into<EntityId>, entity_type: impl Into<EntityType>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entity_type: entity_type.into(),
            title: title.into(),
            excerpt: String::new(),
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }
}

/// Native attributes of an aggregate (a category or tag term).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRecord {
    pub id: EntityId,
    pub aggregate_type: EntityType,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl AggregateRecord {
    pub fn new(id: impl Into<EntityId>, aggregate_type: impl Into<EntityType>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            aggregate_type: aggregate_type.into(),
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Site-wide values available to every template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "-".to_string()
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            separator: default_separator(),
        }
    }
}

impl SiteInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
