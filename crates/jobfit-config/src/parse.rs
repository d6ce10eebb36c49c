//! Configuration file parsing.
//!
//! Parses individual `.jobfit.toml` files into intermediate `RawConfig`
//! structures that preserve the optional nature of all fields before merging.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::{Backend, ConfigError, ConfigScope};

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Scorer settings section.
    pub scorer: Option<RawScorerSettings>,
    /// Job catalog section.
    pub catalog: Option<RawCatalog>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    /// Maximum rows shown by `jobfit score` (0 = all).
    pub limit: Option<usize>,
}

/// Raw scorer settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawScorerSettings {
    /// Scoring backend.
    pub backend: Option<Backend>,
    /// Also drop the ISO English stopword list.
    pub extended_stopwords: Option<bool>,
    /// Output dimensions of the hashing embedder.
    pub dimensions: Option<usize>,
}

/// Raw catalog section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCatalog {
    /// Path to the catalog file, relative to the declaring config file.
    pub path: Option<String>,
}

/// A config file read from disk, kept with where it came from.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found by the upward walk or is the global file.
    pub scope: ConfigScope,
    /// Parsed contents.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Reads and parses the file at `path`.
    pub fn read(path: PathBuf, scope: ConfigScope) -> Result<Self, ConfigError> {
        let config = parse_config_file(&path)?;
        Ok(Self {
            path,
            scope,
            config,
        })
    }

    /// True when this file sets `root = true`.
    pub fn is_root(&self) -> bool {
        self.config.root == Some(true)
    }

    /// Directory containing the file, used to resolve relative paths.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}
