//! Registry configuration, read from `seo-fields.toml`.
//!
//! Every setting is optional. A missing file means defaults; an unreadable
//! or malformed file also means defaults, with a warning, so a bad edit
//! never takes the REST field offline.

use crate::error::ConfigError;
use seofields_resolver::ResolverSettings;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Name of the virtual REST field declared on each type.
    pub field_name: String,
    /// Namespace prefix for stored attribute keys.
    pub meta_key_prefix: String,
    /// Option holding `<field>-<type>` templates.
    pub titles_option: String,
    /// Option holding per-term overrides.
    pub taxonomy_option: String,
    /// Public custom entity types that get a read/write field.
    pub custom_types: Vec<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        let settings = ResolverSettings::default();
        Self {
            field_name: "yoast_meta".to_string(),
            meta_key_prefix: settings.meta_key_prefix,
            titles_option: settings.titles_option,
            taxonomy_option: settings.taxonomy_option,
            custom_types: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parses a TOML document.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses a TOML file, reporting every failure.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No SEO field config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                info!(
                    custom_types = config.custom_types.len(),
                    "Loaded SEO field config from {:?}", path
                );
                config
            }
            Err(e) => {
                warn!("Failed to load SEO field config {:?}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    /// The subset of settings the resolver needs.
    pub fn resolver_settings(&self) -> ResolverSettings {
        ResolverSettings {
            meta_key_prefix: self.meta_key_prefix.clone(),
            titles_option: self.titles_option.clone(),
            taxonomy_option: self.taxonomy_option.clone(),
        }
    }
}
