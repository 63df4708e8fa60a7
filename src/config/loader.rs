//! Configuration loading and discovery for `puzzletext.toml`
//!
//! Provides functions to find and load configuration.

use super::schema::PuzzleConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "puzzletext.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse puzzletext.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Find puzzletext.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for puzzletext.toml
/// 2. Check XDG_CONFIG_HOME/puzzletext/puzzletext.toml (or ~/.config/puzzletext/puzzletext.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find puzzletext.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("puzzletext").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find puzzletext.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a puzzletext.toml file.
///
/// If a path is provided, loads from that file and fails if it is missing.
/// Otherwise uses `find_config()`; if nothing is found, returns the default
/// (empty) configuration.
pub fn load_config(path: Option<&Path>) -> Result<PuzzleConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => load_config_file(&p),
        None => Ok(PuzzleConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<PuzzleConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PuzzleConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    info!(
        path = %path.display(),
        aliases = config.aliases.len(),
        pipelines = config.pipelines.len(),
        "loaded config"
    );
    Ok(config)
}
