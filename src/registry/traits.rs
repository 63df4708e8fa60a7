//! Common trait for registries that store named items.

/// Common trait for registries that store named items.
///
/// Both the top-level [`TransformRegistry`](super::TransformRegistry) and each
/// nested [`Category`](super::Category) map names to values through this interface.
///
/// # Type Parameters
///
/// * `V` - The type of value stored in the registry
///
/// # Example
///
/// ```
/// use puzzletext::registry::{Registry, TransformRegistry};
///
/// let registry = TransformRegistry::with_defaults();
/// assert!(registry.contains("case"));
/// assert!(!registry.is_empty());
/// ```
pub trait Registry<V> {
    /// Check if an item with the given name exists in the registry.
    fn contains(&self, name: &str) -> bool;

    /// Get an item by name.
    ///
    /// Returns `None` if no item with the given name exists.
    fn get(&self, name: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all names in the registry, sorted.
    fn names(&self) -> Vec<&str>;
}
