//! Core transform types and error definitions
//!
//! Contains the `Output` value every transform produces, the `TransformFn`
//! signature shared by the whole catalog, and `TransformError` for lookup and
//! application failures.

use std::fmt;

/// Errors that can occur during transform lookup or application
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TransformError {
    /// No top-level entry with this name
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// No transform with this name (in the given category, if any)
    #[error("unknown transform: {}", display_key(.category.as_deref(), .name))]
    UnknownTransform {
        category: Option<String>,
        name: String,
    },

    /// A category lookup named a direct transform
    #[error("'{0}' is a transform, not a category")]
    NotACategory(String),

    /// A direct lookup named a category
    #[error("'{0}' is a category; a transform name is required")]
    IsACategory(String),

    /// Malformed `category/name` key
    #[error("invalid transform key: '{0}'")]
    InvalidKey(String),

    /// Input did not have the number of lines the transform needs
    #[error("{transform} expects exactly {expected} lines, found {found}")]
    LineCount {
        transform: &'static str,
        expected: usize,
        found: usize,
    },

    /// Input token could not be read as an integer
    #[error("{transform}: cannot parse '{token}' as an integer")]
    InvalidNumber {
        transform: &'static str,
        token: String,
    },

    /// A pipeline step failed
    #[error("pipeline '{pipeline}' failed at step {step}: {source}")]
    Pipeline {
        pipeline: String,
        step: usize,
        source: Box<TransformError>,
    },
}

fn display_key(category: Option<&str>, name: &str) -> String {
    match category {
        Some(category) => format!("{}/{}", category, name),
        None => name.to_string(),
    }
}

/// The value a transform produces.
///
/// Everything in the catalog yields text except `length`, which yields a count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Output {
    Text(String),
    Count(usize),
}

impl Output {
    /// Borrow the text, if this is a text output.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(text) => Some(text),
            Output::Count(_) => None,
        }
    }

    /// The count, if this is a count output.
    pub fn as_count(&self) -> Option<usize> {
        match self {
            Output::Text(_) => None,
            Output::Count(n) => Some(*n),
        }
    }

    /// Convert into text; counts render as decimal.
    pub fn into_text(self) -> String {
        match self {
            Output::Text(text) => text,
            Output::Count(n) => n.to_string(),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Count(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<&str> for Output {
    fn from(text: &str) -> Self {
        Output::Text(text.to_string())
    }
}

/// Signature shared by every transform in the catalog.
///
/// Plain function pointers: no captured state, freely shareable across threads.
pub type TransformFn = fn(&str) -> Result<Output, TransformError>;
