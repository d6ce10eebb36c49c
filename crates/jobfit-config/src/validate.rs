//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::{Backend, Config};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// No catalog is configured; the built-in demo catalog will be used.
    NoCatalogDefined,
    /// The catalog path does not exist.
    CatalogPathMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// The catalog path exists but is not a regular file.
    CatalogPathNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// The embedding backend is selected with zero dimensions.
    ZeroDimensions,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCatalogDefined => {
                write!(f, "no catalog is configured, using the built-in demo catalog")
            }
            Self::CatalogPathMissing { path } => {
                write!(f, "catalog path does not exist: {path}")
            }
            Self::CatalogPathNotFile { path } => {
                write!(f, "catalog path is not a file: {path}")
            }
            Self::ZeroDimensions => {
                write!(f, "scorer.dimensions must be greater than zero")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    match &config.catalog {
        None => warnings.push(ConfigWarning::NoCatalogDefined),
        Some(path) if !path.exists() => warnings.push(ConfigWarning::CatalogPathMissing {
            path: path.display().to_string(),
        }),
        Some(path) if !path.is_file() => warnings.push(ConfigWarning::CatalogPathNotFile {
            path: path.display().to_string(),
        }),
        Some(_) => {}
    }

    if config.scorer.backend == Backend::Embedding && config.scorer.dimensions == 0 {
        warnings.push(ConfigWarning::ZeroDimensions);
    }

    warnings
}
