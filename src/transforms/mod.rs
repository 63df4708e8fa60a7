//! Text transforms for puzzle solving
//!
//! Every transform has the same shape, [`TransformFn`]: it takes the input text
//! and returns an [`Output`] or a [`TransformError`]. None of them keep state.
//!
//! # Module Structure
//!
//! - [`types`] - Output value, function signature and error definitions
//! - [`case`] - Case conversions (kebab, snake, camel, ...)
//! - [`nutrimatic`] - Nutrimatic query builders
//! - [`sort`] - Line ordering
//! - [`tool`] - URL rewriting and clipboard helpers
//! - [`basic`] - Uncategorized transforms, including the grid-backed `rotate` and `transpose`

pub mod basic;
pub mod case;
pub mod nutrimatic;
pub mod sort;
pub mod tool;
pub mod types;

pub use types::{Output, TransformError, TransformFn};

/// Result type alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
