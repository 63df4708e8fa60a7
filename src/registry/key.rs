//! Textual transform keys: `name` or `category/name`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::transforms::TransformError;

/// Address of a transform in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformKey {
    pub category: Option<String>,
    pub name: String,
}

impl TransformKey {
    /// Key for a top-level transform.
    pub fn top_level(name: impl Into<String>) -> Self {
        Self { category: None, name: name.into() }
    }

    /// Key for a transform inside a category.
    pub fn in_category(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self { category: Some(category.into()), name: name.into() }
    }

    /// Parse `name` or `category/name`.
    ///
    /// Splits at the first `/` only, so names may contain slashes. Both parts are
    /// trimmed; transform names may contain inner spaces (`"tool/markdown link"`).
    pub fn parse(s: &str) -> Result<Self, TransformError> {
        let invalid = || TransformError::InvalidKey(s.to_string());

        match s.split_once('/') {
            Some((category, name)) => {
                let (category, name) = (category.trim(), name.trim());
                if category.is_empty() || name.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::in_category(category, name))
            }
            None => {
                let name = s.trim();
                if name.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::top_level(name))
            }
        }
    }
}

impl fmt::Display for TransformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "{}/{}", category, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl FromStr for TransformKey {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TransformKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransformKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
