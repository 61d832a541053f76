//! Configuration file support for dep-matrix.
//!
//! Provides YAML-based configuration through `dep-matrix.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! config values with command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::matrix_tracking::domain::DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dep-matrix.config.yml";

/// Host assumed for commit-message slugs that do not name one.
pub const DEFAULT_HOST: &str = "github.com";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub enabled: Option<bool>,
    pub default_host: Option<String>,
    pub markdown_file: Option<String>,
    pub lock: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// One warning per unknown field, sorted for stable output.
    pub fn unknown_field_warnings(&self) -> Vec<String> {
        let mut keys: Vec<&String> = self.unknown_fields.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| format!("⚠️  Warning: Unknown config field '{}' will be ignored.", key))
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref host) = config.default_host {
        validate_default_host(host)?;
    }

    if let Some(ref file) = config.markdown_file {
        validate_markdown_file(file)?;
    }
    Ok(())
}

/// The markdown file is always written inside the matrix directory, so
/// only a bare file name is accepted.
pub fn validate_markdown_file(file: &str) -> Result<()> {
    if file.trim().is_empty() {
        bail!(
            "Invalid config: markdown_file must not be empty.\n\n\
             💡 Hint: Remove the field to use \"{}\".",
            DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME
        );
    }
    if file.contains('/') || file.contains('\\') || file == ".." || file == "." {
        bail!(
            "Invalid config: markdown_file '{}' must be a file name, not a path.\n\n\
             💡 Hint: The file is always written inside the dependency-matrix directory.",
            file
        );
    }
    Ok(())
}

pub fn validate_default_host(host: &str) -> Result<()> {
    if host.trim().is_empty() {
        bail!(
            "Invalid config: default_host must not be empty.\n\n\
             💡 Hint: Use a git host name such as \"{}\".",
            DEFAULT_HOST
        );
    }
    Ok(())
}

/// Effective settings after merging defaults, the config file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` means derive from the presence of the matrix directory.
    pub enabled: Option<bool>,
    pub default_host: String,
    pub markdown_file: String,
    pub lock: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: None,
            default_host: DEFAULT_HOST.to_string(),
            markdown_file: DEPENDENCY_MATRIX_MARKDOWN_FILE_NAME.to_string(),
            lock: true,
        }
    }
}

/// Flags that can override config values.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub default_host: Option<String>,
    pub markdown_file: Option<String>,
    pub no_lock: bool,
}

impl Settings {
    /// CLI flags override config values, config overrides defaults.
    pub fn resolve(config: Option<&ConfigFile>, overrides: &SettingsOverrides) -> Self {
        let mut settings = Settings::default();

        if let Some(config) = config {
            settings.enabled = config.enabled;
            if let Some(ref host) = config.default_host {
                settings.default_host = host.clone();
            }
            if let Some(ref file) = config.markdown_file {
                settings.markdown_file = file.clone();
            }
            if let Some(lock) = config.lock {
                settings.lock = lock;
            }
        }

        if let Some(ref host) = overrides.default_host {
            settings.default_host = host.clone();
        }
        if let Some(ref file) = overrides.markdown_file {
            settings.markdown_file = file.clone();
        }
        if overrides.no_lock {
            settings.lock = false;
        }

        settings
    }

    pub fn validate(&self) -> Result<()> {
        validate_default_host(&self.default_host)?;
        validate_markdown_file(&self.markdown_file)
    }
}
