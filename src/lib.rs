//! Puzzletext - named text transforms for word-puzzle tooling
//!
//! This library provides:
//! - A registry of pure string transforms (case conversion, Nutrimatic query
//!   helpers, line sorting, URL rewriting, answer formatting)
//! - A grid adapter that reads text as a character or tab-delimited grid for
//!   `rotate` and `transpose`
//! - Pipelines and aliases configured through `puzzletext.toml`
//!
//! Choosing a transform by name and showing results is left to the caller.

pub mod config;
pub mod grid;
pub mod pipeline;
pub mod registry;
pub mod transforms;

pub use pipeline::Pipeline;
pub use registry::{default_registry, Registry, TransformKey, TransformRegistry};
pub use transforms::{Output, TransformError, TransformFn};
