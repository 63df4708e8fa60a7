//! Configuration module for puzzletext
//!
//! Provides types, loading and discovery for `puzzletext.toml`, which holds
//! user aliases and named pipelines.

pub mod loader;
pub mod schema;

pub use loader::{find_config, find_config_from, find_xdg_config, load_config, ConfigError, CONFIG_FILE_NAME};
pub use schema::*;
