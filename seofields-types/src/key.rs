//! The closed set of SEO attribute keys.
//!
//! Every key has three spellings:
//! - wire name (`yoast_wpseo_title`): what REST clients send and receive
//! - field name (`title`): what type-level templates are keyed by
//! - storage key (`_yoast_wpseo_title`): wire name behind a namespace prefix

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix shared by every wire name.
pub const WIRE_PREFIX: &str = "yoast_wpseo_";

/// One SEO attribute that may be read or written through the REST field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeKey {
    #[serde(rename = "yoast_wpseo_focuskw")]
    FocusKeyword,
    #[serde(rename = "yoast_wpseo_title")]
    Title,
    #[serde(rename = "yoast_wpseo_metadesc")]
    MetaDescription,
    #[serde(rename = "yoast_wpseo_linkdex")]
    Linkdex,
    #[serde(rename = "yoast_wpseo_metakeywords")]
    MetaKeywords,
    #[serde(rename = "yoast_wpseo_meta-robots-noindex")]
    RobotsNoIndex,
    #[serde(rename = "yoast_wpseo_meta-robots-nofollow")]
    RobotsNoFollow,
    #[serde(rename = "yoast_wpseo_meta-robots-adv")]
    RobotsAdvanced,
    #[serde(rename = "yoast_wpseo_canonical")]
    Canonical,
    #[serde(rename = "yoast_wpseo_redirect")]
    Redirect,
    #[serde(rename = "yoast_wpseo_opengraph-title")]
    OpenGraphTitle,
    #[serde(rename = "yoast_wpseo_opengraph-description")]
    OpenGraphDescription,
    #[serde(rename = "yoast_wpseo_opengraph-image")]
    OpenGraphImage,
    #[serde(rename = "yoast_wpseo_twitter-title")]
    TwitterTitle,
    #[serde(rename = "yoast_wpseo_twitter-description")]
    TwitterDescription,
    #[serde(rename = "yoast_wpseo_twitter-image")]
    TwitterImage,
}

impl AttributeKey {
    /// All keys, in the order the REST field reports them.
    pub const ALL: [AttributeKey; 16] = [
        Self::FocusKeyword,
        Self::Title,
        Self::MetaDescription,
        Self::Linkdex,
        Self::MetaKeywords,
        Self::RobotsNoIndex,
        Self::RobotsNoFollow,
        Self::RobotsAdvanced,
        Self::Canonical,
        Self::Redirect,
        Self::OpenGraphTitle,
        Self::OpenGraphDescription,
        Self::OpenGraphImage,
        Self::TwitterTitle,
        Self::TwitterDescription,
        Self::TwitterImage,
    ];

    /// Keys exposed for aggregates (categories, tags).
    pub const AGGREGATE: [AttributeKey; 2] = [Self::Title, Self::MetaDescription];

    /// Returns the field name used in template option entries.
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::FocusKeyword => "focuskw",
            Self::Title => "title",
            Self::MetaDescription => "metadesc",
            Self::Linkdex => "linkdex",
            Self::MetaKeywords => "metakeywords",
            Self::RobotsNoIndex => "meta-robots-noindex",
            Self::RobotsNoFollow => "meta-robots-nofollow",
            Self::RobotsAdvanced => "meta-robots-adv",
            Self::Canonical => "canonical",
            Self::Redirect => "redirect",
            Self::OpenGraphTitle => "opengraph-title",
            Self::OpenGraphDescription => "opengraph-description",
            Self::OpenGraphImage => "opengraph-image",
            Self::TwitterTitle => "twitter-title",
            Self::TwitterDescription => "twitter-description",
            Self::TwitterImage => "twitter-image",
        }
    }

    /// Returns the name clients use in REST payloads.
    pub fn wire_name(&self) -> String {
        format!("{WIRE_PREFIX}{}", self.field_name())
    }

    /// Returns the namespaced key under which the host persists this attribute.
    pub fn storage_key(&self, prefix: &str) -> String {
        format!("{prefix}{WIRE_PREFIX}{}", self.field_name())
    }

    /// Looks up a key by its field name (`title`, `opengraph-image`).
    pub fn from_field_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.field_name() == name)
    }

    /// Looks up a key by its wire name (`yoast_wpseo_title`).
    pub fn from_wire_name(name: &str) -> Option<Self> {
        name.strip_prefix(WIRE_PREFIX)
            .and_then(Self::from_field_name)
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{WIRE_PREFIX}{}", self.field_name())
    }
}

/// Accepts either the wire name or the bare field name.
impl FromStr for AttributeKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wire_name(s)
            .or_else(|| Self::from_field_name(s))
            .ok_or_else(|| Error::UnsupportedKey(s.to_string()))
    }
}
