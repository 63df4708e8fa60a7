//! Transform registry: the two-level catalog of named transforms.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;
use tracing::{debug, trace};

use crate::transforms::{basic, case, nutrimatic, sort, tool};
use crate::transforms::{Output, TransformError, TransformFn};

use super::key::TransformKey;
use super::traits::Registry;

/// A named group of transforms, such as `case` or `tool`.
#[derive(Clone, Default)]
pub struct Category {
    transforms: HashMap<String, TransformFn>,
}

impl Category {
    pub fn new() -> Self {
        Self { transforms: HashMap::new() }
    }

    /// Register a transform, replacing any existing one with the same name.
    pub fn register(&mut self, name: impl Into<String>, transform: TransformFn) {
        self.transforms.insert(name.into(), transform);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &TransformFn)> {
        self.transforms.iter()
    }
}

impl fmt::Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

impl Registry<TransformFn> for Category {
    fn contains(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&TransformFn> {
        self.transforms.get(name)
    }

    fn len(&self) -> usize {
        self.transforms.len()
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.transforms.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// A top-level registry entry.
#[derive(Clone)]
pub enum Entry {
    /// A transform addressed by its top-level name alone
    Transform(TransformFn),
    /// A group of transforms addressed as `category/name`
    Category(Category),
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Transform(_) => f.write_str("Transform"),
            Entry::Category(category) => f.debug_tuple("Category").field(category).finish(),
        }
    }
}

/// One row of the catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TransformInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub name: String,
    /// `name` or `category/name`, parseable with [`TransformKey::parse`]
    pub key: String,
}

/// Registry mapping names to transforms or categories of transforms.
///
/// Lookups never fall back or guess: a missing name is an error naming what
/// was asked for.
#[derive(Debug, Clone)]
pub struct TransformRegistry {
    entries: HashMap<String, Entry>,
}

impl TransformRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Register a top-level transform.
    ///
    /// Replaces whatever entry (transform or category) had the same name.
    pub fn register(&mut self, name: impl Into<String>, transform: TransformFn) {
        self.entries.insert(name.into(), Entry::Transform(transform));
    }

    /// Register a transform inside a category, creating the category if needed.
    ///
    /// A top-level transform with the category's name is replaced by the category.
    pub fn register_in(
        &mut self,
        category: impl Into<String>,
        name: impl Into<String>,
        transform: TransformFn,
    ) {
        let entry =
            self.entries.entry(category.into()).or_insert_with(|| Entry::Category(Category::new()));
        if matches!(entry, Entry::Transform(_)) {
            *entry = Entry::Category(Category::new());
        }
        if let Entry::Category(category) = entry {
            category.register(name, transform);
        }
    }

    /// Register a whole category at once.
    pub fn register_category(&mut self, name: impl Into<String>, category: Category) {
        self.entries.insert(name.into(), Entry::Category(category));
    }

    /// Look up a transform by optional category and name.
    pub fn lookup(&self, category: Option<&str>, name: &str) -> Result<TransformFn, TransformError> {
        let found = match category {
            None => match self.entries.get(name) {
                Some(Entry::Transform(transform)) => Ok(*transform),
                Some(Entry::Category(_)) => Err(TransformError::IsACategory(name.to_string())),
                None => Err(TransformError::UnknownTransform {
                    category: None,
                    name: name.to_string(),
                }),
            },
            Some(category_name) => match self.entries.get(category_name) {
                Some(Entry::Category(category)) => {
                    category.get(name).copied().ok_or_else(|| TransformError::UnknownTransform {
                        category: Some(category_name.to_string()),
                        name: name.to_string(),
                    })
                }
                Some(Entry::Transform(_)) => {
                    Err(TransformError::NotACategory(category_name.to_string()))
                }
                None => Err(TransformError::UnknownCategory(category_name.to_string())),
            },
        };

        match &found {
            Ok(_) => trace!(category, name, "resolved transform"),
            Err(err) => debug!(category, name, error = %err, "transform lookup failed"),
        }
        found
    }

    /// Look up a transform by parsed key.
    pub fn resolve(&self, key: &TransformKey) -> Result<TransformFn, TransformError> {
        self.lookup(key.category.as_deref(), &key.name)
    }

    /// Look up a transform and run it on the input.
    pub fn apply(
        &self,
        category: Option<&str>,
        name: &str,
        input: &str,
    ) -> Result<Output, TransformError> {
        let transform = self.lookup(category, name)?;
        transform(input)
    }

    /// Run the transform addressed by a parsed key.
    pub fn apply_key(&self, key: &TransformKey, input: &str) -> Result<Output, TransformError> {
        let transform = self.resolve(key)?;
        transform(input)
    }

    /// Sorted names inside a category.
    pub fn category_names(&self, category: &str) -> Result<Vec<&str>, TransformError> {
        match self.entries.get(category) {
            Some(Entry::Category(category)) => Ok(category.names()),
            Some(Entry::Transform(_)) => Err(TransformError::NotACategory(category.to_string())),
            None => Err(TransformError::UnknownCategory(category.to_string())),
        }
    }

    /// Every transform in the registry, sorted by category then name.
    ///
    /// Top-level transforms (no category) sort first.
    pub fn catalog(&self) -> Vec<TransformInfo> {
        let mut infos = Vec::new();
        for (key, entry) in &self.entries {
            match entry {
                Entry::Transform(_) => infos.push(TransformInfo {
                    category: None,
                    name: key.clone(),
                    key: key.clone(),
                }),
                Entry::Category(category) => {
                    for (name, _) in category.iter() {
                        infos.push(TransformInfo {
                            category: Some(key.clone()),
                            name: name.clone(),
                            key: format!("{}/{}", key, name),
                        });
                    }
                }
            }
        }
        infos.sort();
        infos
    }

    /// Create a registry with the built-in catalog
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        let mut cases = Category::new();
        cases.register("lowercase", case::lowercase);
        cases.register("uppercase", case::uppercase);
        cases.register("titlecase", case::titlecase);
        cases.register("kebabcase", case::kebabcase);
        cases.register("snakecase", case::snakecase);
        cases.register("camelcase", case::camelcase);
        cases.register("pascalcase", case::pascalcase);
        cases.register("nocase", case::nocase);
        registry.register_category("case", cases);

        let mut nutrimatics = Category::new();
        nutrimatics.register("from ANSWERIZE", nutrimatic::from_answerize);
        nutrimatics.register("add A* between", nutrimatic::add_any_between);
        nutrimatics.register("add ?", nutrimatic::add_optional);
        nutrimatics.register("from enumeration", nutrimatic::from_enumeration);
        registry.register_category("nutrimatic", nutrimatics);

        let mut sorts = Category::new();
        sorts.register("alphabetical", sort::alphabetical);
        sorts.register("by length", sort::by_length);
        sorts.register("reverse", sort::reverse_lines);
        registry.register_category("sort", sorts);

        let mut tools = Category::new();
        tools.register("2github commits atom", tool::github_commits_atom);
        tools.register("2github releases atom", tool::github_releases_atom);
        tools.register("2github raw url", tool::github_raw_url);
        tools.register("2ghcli url", tool::github_cli_url);
        tools.register("2unix url", tool::to_unix_path);
        tools.register("22unix url", tool::escaped_to_unix_path);
        tools.register("2windows url", tool::to_windows_path);
        tools.register("2windows url2", tool::to_escaped_windows_path);
        tools.register("lobechat assistants", tool::lobechat_assistant);
        tools.register("linebreak 2comma", tool::linebreak_to_comma);
        tools.register("markdown link", tool::markdown_link);
        registry.register_category("tool", tools);

        registry.register("alphabet", basic::alphabet);
        registry.register("answerize", basic::answerize);
        registry.register("length", basic::length);
        registry.register("reverse", basic::reverse);
        registry.register("rotate", basic::rotate);
        registry.register("transpose", basic::transpose);
        registry.register("unique", basic::unique);

        registry
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Registry<Entry> for TransformRegistry {
    fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

static DEFAULT_REGISTRY: Lazy<TransformRegistry> = Lazy::new(TransformRegistry::with_defaults);

/// Shared registry holding the built-in catalog, built on first use.
pub fn default_registry() -> &'static TransformRegistry {
    &DEFAULT_REGISTRY
}
