//! Configuration file handling
//!
//! The config lives at `<config_dir>/litmd/config.toml` unless `LITMD_CONFIG`
//! points elsewhere. Every field has a default, so a missing file or a
//! partial file is always valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use toml_edit::{DocumentMut, Item};

use crate::export::{filename, ExportError, Exporter};
use crate::theme::ThemeMode;
use crate::view::ViewMode;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "LITMD_CONFIG";

/// Errors raised while loading, saving or migrating the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid TOML: {0}")]
    InvalidToml(#[from] toml_edit::TomlError),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// View mode the viewer starts in
    #[serde(default)]
    pub default_mode: ViewMode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// How long the "Copied" indicator stays up, in milliseconds
    #[serde(default = "default_indicator_ms")]
    pub indicator_ms: u64,
}

fn default_indicator_ms() -> u64 {
    2000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            indicator_ms: default_indicator_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Target directory; empty means the current directory
    #[serde(default)]
    pub directory: String,
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
    /// Name substituted for `{name}`
    #[serde(default = "default_export_name")]
    pub name: String,
}

fn default_filename_template() -> String {
    filename::DEFAULT_TEMPLATE.to_string()
}

fn default_export_name() -> String {
    filename::DEFAULT_NAME.to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: String::new(),
            filename_template: default_filename_template(),
            name: default_export_name(),
        }
    }
}

impl ExportConfig {
    /// Resolved target directory.
    pub fn directory_path(&self) -> PathBuf {
        if self.directory.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.directory)
        }
    }

    /// Exporter configured with this section's directory and template.
    pub fn exporter(&self) -> Result<Exporter, ExportError> {
        Exporter::new(self.directory_path()).with_template(&self.filename_template)
    }
}

impl Config {
    /// Location of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("litmd").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Write the config to its default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Outcome of [`migrate_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationResult {
    /// Updated file content
    pub content: String,
    /// Added fields as `section.key`
    pub added_fields: Vec<String>,
    /// Sections that were missing entirely
    pub sections_added: Vec<String>,
}

impl MigrationResult {
    pub fn has_changes(&self) -> bool {
        !self.added_fields.is_empty()
    }
}

/// Add every field missing from `content` with its default value.
///
/// Existing values, comments and ordering are preserved; only new keys and
/// sections are appended.
pub fn migrate_config(content: &str) -> Result<MigrationResult, ConfigError> {
    let mut doc: DocumentMut = content.parse()?;
    let defaults: DocumentMut = toml::to_string_pretty(&Config::default())?.parse()?;

    let mut added_fields = Vec::new();
    let mut sections_added = Vec::new();

    for (section, default_item) in defaults.iter() {
        let Some(default_table) = default_item.as_table() else {
            continue;
        };

        let present = doc.contains_key(section);
        match doc.get_mut(section).and_then(Item::as_table_mut) {
            Some(table) => {
                for (key, value) in default_table.iter() {
                    if !table.contains_key(key) {
                        table.insert(key, value.clone());
                        added_fields.push(format!("{}.{}", section, key));
                    }
                }
            }
            None if present => {
                tracing::warn!(section, "config entry is not a table, leaving it alone");
            }
            None => {
                doc.insert(section, Item::Table(default_table.clone()));
                sections_added.push(section.to_string());
                added_fields.extend(
                    default_table
                        .iter()
                        .map(|(key, _)| format!("{}.{}", section, key)),
                );
            }
        }
    }

    Ok(MigrationResult {
        content: doc.to_string(),
        added_fields,
        sections_added,
    })
}
