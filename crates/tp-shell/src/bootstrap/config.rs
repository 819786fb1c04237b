//! Configuration loading.
//!
//! Reads a TOML file into [`AppConfig`]. Missing keys fall back to the
//! built-in defaults; structural validation lives in `tp-core`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tp_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid TOML, or fails
/// validation (for example an empty prompt list).
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    AppConfig::from_toml_str(&content)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Loads `path` when given, defaults otherwise.
pub fn resolve_config(path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => load_config(&path),
        None => Ok(AppConfig::default()),
    }
}

/// Effective configuration as TOML.
pub fn render_config(config: &AppConfig) -> anyhow::Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config as TOML")
}
