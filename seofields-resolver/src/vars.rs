//! `%%name%%` placeholder substitution.
//!
//! Templates reference live entity values by name. Every placeholder is
//! replaced exactly once; names with no value become the empty string, so
//! no `%%...%%` token survives substitution.

use regex_lite::{Captures, Regex};
use seofields_types::{AggregateRecord, EntityRecord, EntityType, SiteInfo};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Names run to the next `%%` and hold no `%` or whitespace, so
/// `%%cf_my-field%%` is one placeholder.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%%([^%\s]+)%%").expect("placeholder pattern is valid"));

/// Live values available to a template, keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Variables {
    values: HashMap<&'static str, String>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Site-wide values: `sitename`, `sitedesc`, `sep`.
    pub fn for_site(site: &SiteInfo) -> Self {
        let mut vars = Self::new();
        vars.set("sitename", &site.name);
        vars.set("sitedesc", &site.description);
        vars.set("sep", &site.separator);
        vars
    }

    /// Site values plus the entity's `title`, `excerpt`, `id` and `pt_single`.
    ///
    /// `pt_single` comes from `entity_type` even when the host has no record.
    pub fn for_entity(site: &SiteInfo, entity_type: &EntityType, entity: Option<&EntityRecord>) -> Self {
        let mut vars = Self::for_site(site);
        vars.set("pt_single", entity_type.as_str());
        if let Some(entity) = entity {
            vars.add_entity(entity);
        }
        vars
    }

    /// Adds term values: `term_title`, `term_description`, and the
    /// `category`/`tag` alias matching the term's type.
    pub fn add_aggregate(&mut self, aggregate: &AggregateRecord) {
        self.set("term_title", &aggregate.name);
        self.set("term_description", &aggregate.description);
        match aggregate.aggregate_type.as_str() {
            EntityType::CATEGORY => self.set("category", &aggregate.name),
            EntityType::TAG => self.set("tag", &aggregate.name),
            _ => {}
        }
    }

    pub fn add_entity(&mut self, entity: &EntityRecord) {
        self.set("title", &entity.title);
        self.set("excerpt", &entity.excerpt);
        self.set("id", entity.id.to_string());
    }

    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Replaces every `%%name%%` in `template` with its value, or `""`.
pub fn substitute(template: &str, vars: &Variables) -> String {
    if !template.contains("%%") {
        return template.to_string();
    }
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}
