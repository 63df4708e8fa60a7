//! Registry of named transforms.
//!
//! This module provides:
//! - A unified `Registry` trait for consistent registry interfaces
//! - `TransformRegistry`, the two-level catalog: top-level transforms plus
//!   categories (`case`, `nutrimatic`, `sort`, `tool`) of named transforms
//! - `TransformKey` for addressing transforms as `name` or `category/name`
//!
//! Lookups of unknown names fail with a [`TransformError`](crate::transforms::TransformError);
//! presenting that to a user is left to the caller.

mod key;
mod traits;
mod transform;

// Re-export all public items from submodules
pub use key::TransformKey;
pub use traits::Registry;
pub use transform::{default_registry, Category, Entry, TransformInfo, TransformRegistry};
