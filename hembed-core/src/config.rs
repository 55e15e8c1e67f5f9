//! Configuration management for hembed

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeVariant,
    pub vault: VaultConfig,
    pub picker: PickerConfig,
    pub dialog: DialogConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// File extensions treated as notes (without the dot)
    pub extensions: Vec<String>,
    /// Descend into dot-directories such as `.obsidian`
    pub include_hidden: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub case_sensitive: bool,
    /// Hide the document being edited from the note list
    pub skip_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogConfig {
    /// Columns of indentation per heading level
    pub indent: u16,
    /// Show the `#` markers next to each heading
    pub show_levels: bool,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["md".to_string()],
            include_hidden: false,
        }
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            skip_active: true,
        }
    }
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            show_levels: false,
        }
    }
}

impl Config {
    /// Get the platform-specific config file path
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "hembed")
            .map(|proj_dirs| proj_dirs.config_dir().join("hembed.toml"))
    }

    /// Load configuration from the platform config file, falling back to
    /// defaults if it is missing
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
