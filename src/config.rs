//! Configuration management for the catalog generator.
//!
//! This module handles loading, validating, and saving configuration in TOML
//! format. A project-local `keyboard-catalog.toml` takes precedence over the
//! per-user file in the platform config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_BIN_DIR, DEFAULT_BIN_OUTPUT, DEFAULT_CONFIG_DIR, DEFAULT_OUTPUT,
    LOCAL_CONFIG_FILE,
};
use crate::export::OutputFormat;

/// Path configuration for input trees and generated files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Root of the per-keyboard configuration tree
    pub config_dir: PathBuf,
    /// Generated manifest module
    pub output: PathBuf,
    /// Flat directory of prebuilt `*_config.bin` bundles
    pub bin_dir: PathBuf,
    /// Generated firmware bundle map
    pub bin_output: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            bin_dir: PathBuf::from(DEFAULT_BIN_DIR),
            bin_output: PathBuf::from(DEFAULT_BIN_OUTPUT),
        }
    }
}

/// Manifest generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GenerateConfig {
    /// Output format of the manifest
    pub format: OutputFormat,
    /// Treat missing companion config files as errors
    pub strict: bool,
}

/// Application configuration.
///
/// # File Location
///
/// 1. `./keyboard-catalog.toml` in the working directory
/// 2. Linux: `~/.config/KeyboardCatalog/config.toml`
/// 3. macOS: `~/Library/Application Support/KeyboardCatalog/config.toml`
/// 4. Windows: `%APPDATA%\KeyboardCatalog\config.toml`
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// File system paths
    pub paths: PathConfig,
    /// Generation settings
    pub generate: GenerateConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the per-user config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path of the project-local config file.
    #[must_use]
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Finds the config file to load, if any.
    ///
    /// An explicit path is always returned as-is; otherwise the project-local
    /// file wins over the per-user one.
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = Self::local_config_path();
        if local.exists() {
            return Some(local);
        }

        Self::config_file_path().ok().filter(|path| path.exists())
    }

    /// Loads configuration, falling back to defaults when no file is found.
    ///
    /// An explicitly requested file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::new()),
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `path` using atomic write.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - no path is empty
    /// - outputs do not point at existing directories
    /// - the manifest is not written inside the tree it is generated from
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("config_dir", &self.paths.config_dir),
            ("output", &self.paths.output),
            ("bin_dir", &self.paths.bin_dir),
            ("bin_output", &self.paths.bin_output),
        ];
        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                anyhow::bail!("paths.{key} cannot be empty");
            }
        }

        for (key, path) in [
            ("output", &self.paths.output),
            ("bin_output", &self.paths.bin_output),
        ] {
            if path.is_dir() {
                anyhow::bail!("paths.{key} is a directory: {}", path.display());
            }
        }

        // A manifest inside the scanned tree would itself be scanned next run
        if self.paths.output.starts_with(&self.paths.config_dir) {
            anyhow::bail!(
                "paths.output ({}) must not be inside paths.config_dir ({})",
                self.paths.output.display(),
                self.paths.config_dir.display()
            );
        }

        Ok(())
    }
}
