//! Conversion configuration
//!
//! Settings come from three layers, lowest precedence first: built-in
//! defaults, a TOML config file (an explicit `--config` path, or
//! `<config dir>/doxmd/config.toml` when present), and command-line flags.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned recursively for Doxygen `.xml` files.
    pub input_dir: PathBuf,
    /// Directory the `.mdx` output is written to (created if missing).
    pub output_dir: PathBuf,
    /// Title of the generated index page.
    pub project_name: String,
    /// Offset applied to every heading level before clamping to 1..=6.
    pub heading_offset: i32,
    /// Whether to write `index.mdx` after a successful run.
    pub emit_index: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: PathBuf::from("docs/build/xml"),
            output_dir: PathBuf::from("docs/mdx"),
            project_name: "Project".to_string(),
            heading_offset: 0,
            emit_index: true,
        }
    }
}

impl Config {
    /// Load configuration from the user config directory, falling back to
    /// defaults when no config file exists.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Load configuration from an explicit TOML file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Get the path to the user-level config file.
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("doxmd").join("config.toml"))
    }
}
