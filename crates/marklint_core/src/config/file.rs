//! On-disk configuration files.

use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::LinterError;

/// Serialization of a configuration file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json` and `.jsonc`, comments allowed.
    Json,
    /// `.yaml` and `.yml`.
    Yaml,
}

impl ConfigFormat {
    /// Detects the format of `path`, failing on an unsupported extension.
    pub fn from_path(path: &Path) -> Result<Self, LinterError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json" | "jsonc") => Ok(Self::Json),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            _ => Err(LinterError::config(format!(
                "Unsupported config format: {}",
                path.display()
            ))),
        }
    }
}

/// A configuration file as written, before `extends` is followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Rule id (or alias) to `bool`, severity string or option mapping.
    #[serde(default, alias = "options")]
    pub config: Map<String, Value>,

    /// Globs of files that are never linted.
    #[serde(default, alias = "ignorePatterns")]
    pub ignores: Vec<String>,

    /// Glob-scoped option fragments.
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,

    /// Path of a parent configuration, relative to this file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
}

/// One entry of the `overrides` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideEntry {
    #[serde(default, alias = "filePatterns")]
    pub files: Vec<String>,
    #[serde(default, alias = "options")]
    pub config: Map<String, Value>,
}

impl ConfigFile {
    /// Reads and parses a configuration file.
    pub fn from_path(path: &Path) -> Result<Self, LinterError> {
        let format = ConfigFormat::from_path(path)?;
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content, format)
            .map_err(|e| LinterError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parses configuration text in the given format.
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self, LinterError> {
        match format {
            ConfigFormat::Json => Self::from_json(content),
            ConfigFormat::Yaml => Self::from_yaml(content),
        }
    }

    /// Parses JSON, tolerating `//` and `/* */` comments and trailing commas.
    pub fn from_json(content: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?;
        match value {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| LinterError::config(format!("Invalid config: {}", e))),
            None => Ok(Self::default()),
        }
    }

    /// Parses YAML.
    pub fn from_yaml(content: &str) -> Result<Self, LinterError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|e| LinterError::config(format!("Invalid YAML: {}", e)))
    }
}
