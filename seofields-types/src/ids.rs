//! Identifier types for content addressed through the REST fields.
//!
//! The host CMS owns its content; these types only name it.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Host-assigned identifier of an entity or aggregate (post ID, term ID).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    /// Wraps a raw host identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw host identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Parses an entity ID from its decimal string form.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a
    /// non-negative integer yields [`Error::InvalidId`].
    pub fn parse(s: &str) -> crate::Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for EntityId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EntityId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Type tag of an entity or aggregate (`post`, `page`, `category`, a custom type).
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    pub const POST: &'static str = "post";
    pub const PAGE: &'static str = "page";
    pub const CATEGORY: &'static str = "category";
    pub const TAG: &'static str = "tag";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn post() -> Self {
        Self::new(Self::POST)
    }

    pub fn page() -> Self {
        Self::new(Self::PAGE)
    }

    pub fn category() -> Self {
        Self::new(Self::CATEGORY)
    }

    pub fn tag() -> Self {
        Self::new(Self::TAG)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for EntityType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for EntityType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
