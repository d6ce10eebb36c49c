//! Configuration system for jobfit.
//!
//! jobfit uses TOML configuration files named `.jobfit.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, parsing each
//! `.jobfit.toml` on the way, then reading `~/.jobfit.toml` as the global config with lowest
//! precedence. A file with `root = true` ends the walk and excludes the global config.

#![warn(missing_docs)]

mod backend;
mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
#[cfg(test)]
mod test_support;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

pub use backend::Backend;
pub use discovery::{CONFIG_FILENAME, ConfigScope, discover_configs, global_config_path};
pub use error::ConfigError;
pub use merge::merge_configs;
pub use parse::{
    ParsedConfig, RawCatalog, RawConfig, RawScorerSettings, RawSettings, parse_config_file,
    parse_config_str,
};
pub use resolve::resolve_path;
use serde::{Deserialize, Serialize};
pub use templates::starter_config;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default number of rows shown by `jobfit score`.
pub const DEFAULT_LIMIT: usize = 10;

/// Default vector size for the embedding backend.
pub const DEFAULT_DIMENSIONS: usize = 256;

/// Top-level merged configuration for jobfit.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.jobfit.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Scorer settings.
    pub scorer: ScorerSettings,
    /// Resolved path of the job catalog, if one is configured.
    pub catalog: Option<PathBuf>,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.jobfit.toml` files.
    ///
    /// Files are parsed once, during discovery, and merged closest first.
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        merge_configs(&discover_configs(cwd)?)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| ParsedConfig::read(path.clone(), ConfigScope::Local))
            .collect::<Result<Vec<_>, _>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - No catalog configured
    /// - Catalog paths that don't exist or aren't files
    /// - Zero embedding dimensions when the embedding backend is selected
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same layout as a `.jobfit.toml` file. The catalog is
    /// emitted with its resolved absolute path.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            settings: self.settings.clone(),
            scorer: self.scorer.clone(),
            catalog: self.catalog.as_ref().map(|path| SerializableCatalog {
                path: path.display().to_string(),
            }),
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// General settings for jobfit.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Maximum rows shown by `jobfit score` (0 = all).
    pub limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Scorer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScorerSettings {
    /// Scoring backend.
    pub backend: Backend,
    /// Also drop the ISO English stopword list when tokenizing.
    pub extended_stopwords: bool,
    /// Output dimensions of the hashing embedder.
    pub dimensions: usize,
}

impl Default for ScorerSettings {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            extended_stopwords: false,
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// General settings.
    settings: Settings,
    /// Scorer settings.
    scorer: ScorerSettings,
    /// Catalog section, omitted when no catalog is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    catalog: Option<SerializableCatalog>,
}

/// Catalog section with the resolved path.
#[derive(Serialize)]
struct SerializableCatalog {
    /// Resolved catalog path.
    path: String,
}
