//! Path resolution for paths declared in config files.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths. The target is
//! not required to exist; validation reports missing files separately.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path against the directory of the declaring file.
///
/// Handles three cases:
/// - Tilde paths (`~/jobs.toml`) - expanded to home directory
/// - Relative paths (`./jobs.toml`, `../shared/jobs.toml`) - joined onto `config_dir`
/// - Absolute paths - returned as-is
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("./jobs.toml", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/./jobs.toml"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved = resolve_path("../shared/jobs.toml", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/../shared/jobs.toml"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/data/jobs.toml", Path::new("/other")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/jobs.toml"));
    }

    #[test]
    fn test_resolve_missing_target_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = resolve_path("nope.toml", dir.path()).unwrap();
        assert_eq!(resolved, dir.path().join("nope.toml"));
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let result = expand_tilde("~/jobs/catalog.toml").unwrap();
        assert_eq!(result, dirs.home_dir().join("jobs/catalog.toml"));
    }

    #[test]
    fn test_expand_no_tilde() {
        assert_eq!(expand_tilde("./jobs.toml").unwrap(), PathBuf::from("./jobs.toml"));
        assert_eq!(
            expand_tilde("/absolute/jobs.toml").unwrap(),
            PathBuf::from("/absolute/jobs.toml")
        );
    }
}
