//! Error types for the field registry.

use crate::binding::BindingKind;
use seofields_host::HostError;
use seofields_resolver::ResolveError;
use seofields_types::EntityType;
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("entity type '{0}' has no registered SEO field")]
    UnregisteredType(EntityType),

    #[error("SEO field on '{0}' is not readable")]
    NotReadable(EntityType),

    #[error("SEO field on '{0}' is not writable")]
    NotWritable(EntityType),

    #[error("entity type '{entity_type}' is not registered as {expected:?}")]
    KindMismatch {
        entity_type: EntityType,
        expected: BindingKind,
    },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("host error: {0}")]
    Host(#[from] HostError),
}

/// Errors loading the registry configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
