//! Configuration merging.
//!
//! Merges the parsed `.jobfit.toml` files into a single resolved `Config`, applying
//! precedence rules and resolving paths.

use std::path::PathBuf;

use crate::{
    Config, ConfigError, ScorerSettings, Settings,
    parse::{ParsedConfig, RawScorerSettings, RawSettings},
    resolve::resolve_path,
};

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first
/// (closest to CWD), lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Catalog path: first defined value wins, resolved against its own file
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs);
    let scorer = merge_scorer_settings(configs);
    let catalog = merge_catalog(configs)?;
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        settings,
        scorer,
        catalog,
        config_root,
    })
}

/// Merges general settings, taking first defined value for each field.
fn merge_settings(configs: &[ParsedConfig]) -> Settings {
    let mut result = Settings::default();

    // Lowest precedence first so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref settings) = parsed.config.settings {
            apply_raw_settings(&mut result, settings);
        }
    }

    result
}

/// Applies raw settings to result, overwriting any present values.
fn apply_raw_settings(result: &mut Settings, raw: &RawSettings) {
    if let Some(v) = raw.limit {
        result.limit = v;
    }
}

/// Merges scorer settings.
fn merge_scorer_settings(configs: &[ParsedConfig]) -> ScorerSettings {
    let mut result = ScorerSettings::default();

    for parsed in configs.iter().rev() {
        if let Some(ref scorer) = parsed.config.scorer {
            apply_raw_scorer(&mut result, scorer);
        }
    }

    result
}

/// Applies raw scorer settings to result.
fn apply_raw_scorer(result: &mut ScorerSettings, raw: &RawScorerSettings) {
    if let Some(v) = raw.backend {
        result.backend = v;
    }
    if let Some(v) = raw.extended_stopwords {
        result.extended_stopwords = v;
    }
    if let Some(v) = raw.dimensions {
        result.dimensions = v;
    }
}

/// Finds the highest-precedence catalog path and resolves it.
fn merge_catalog(configs: &[ParsedConfig]) -> Result<Option<PathBuf>, ConfigError> {
    for parsed in configs {
        if let Some(ref catalog) = parsed.config.catalog
            && let Some(ref path) = catalog.path
        {
            return resolve_path(path, parsed.dir()).map(Some);
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Backend, ConfigScope, parse::parse_config};

    /// Builds a parsed config from TOML at the given path.
    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            scope: ConfigScope::Local,
            config: parse_config(toml).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]).unwrap();
        assert_eq!(config.settings.limit, Settings::default().limit);
        assert!(config.catalog.is_none());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_merge_single() {
        let config = merge_configs(&[parsed(
            "/project/.jobfit.toml",
            "[settings]\nlimit = 4\n[scorer]\nbackend = \"embedding\"\n",
        )])
        .unwrap();
        assert_eq!(config.settings.limit, 4);
        assert_eq!(config.scorer.backend, Backend::Embedding);
        assert_eq!(config.config_root, Some(PathBuf::from("/project")));
    }

    #[test]
    fn test_higher_precedence_wins_per_field() {
        let local = parsed("/home/u/project/.jobfit.toml", "[scorer]\ndimensions = 64\n");
        let global = parsed(
            "/home/u/.jobfit.toml",
            "[scorer]\ndimensions = 512\nextended_stopwords = true\n[settings]\nlimit = 2\n",
        );
        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.scorer.dimensions, 64);
        assert!(config.scorer.extended_stopwords);
        assert_eq!(config.settings.limit, 2);
        assert_eq!(config.scorer.backend, Backend::TfIdf);
    }

    #[test]
    fn test_catalog_resolved_against_declaring_file() {
        let local = parsed("/home/u/project/.jobfit.toml", "[settings]\nlimit = 1\n");
        let global = parsed("/home/u/.jobfit.toml", "[catalog]\npath = \"jobs.toml\"\n");
        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/home/u/jobs.toml")));
        assert_eq!(config.config_root, Some(PathBuf::from("/home/u/project")));
    }

    #[test]
    fn test_local_catalog_overrides_global() {
        let local = parsed("/p/.jobfit.toml", "[catalog]\npath = \"local.toml\"\n");
        let global = parsed("/h/.jobfit.toml", "[catalog]\npath = \"global.toml\"\n");
        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("/p/local.toml")));
    }
}
