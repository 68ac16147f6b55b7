use seofields_host::Capabilities;
use seofields_types::EntityType;
use serde::{Deserialize, Serialize};

/// How a registered type's SEO values are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// Per-entity fallback chain; may be writable.
    Entity,
    /// Term resolved through a representative item; always read-only.
    Aggregate,
}

/// The SEO field contract for one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldBinding {
    pub entity_type: EntityType,
    pub kind: BindingKind,
    pub capabilities: Capabilities,
}

impl FieldBinding {
    pub fn entity(entity_type: EntityType, capabilities: Capabilities) -> Self {
        Self {
            entity_type,
            kind: BindingKind::Entity,
            capabilities,
        }
    }

    pub fn aggregate(aggregate_type: EntityType) -> Self {
        Self {
            entity_type: aggregate_type,
            kind: BindingKind::Aggregate,
            capabilities: Capabilities::read_only(),
        }
    }
}
