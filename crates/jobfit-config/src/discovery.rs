//! Locating and reading `.jobfit.toml` files.
//!
//! Every `.jobfit.toml` between the working directory and the filesystem root
//! is read, nearest first. Each file is parsed as soon as it is found, and a
//! parsed `root = true` ends the walk. The home directory file is appended last
//! unless the walk was cut short or already passed through it.

use std::path::{Path, PathBuf};

use crate::{ConfigError, ParsedConfig, resolve::home_dir};

/// Config filename searched for in every directory.
pub const CONFIG_FILENAME: &str = ".jobfit.toml";

/// Which kind of file a config was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Found by walking up from the working directory.
    Local,
    /// `~/.jobfit.toml`.
    Global,
}

/// Path of the global config file, whether or not it exists.
pub fn global_config_path() -> Option<PathBuf> {
    home_dir().ok().map(|home| home.join(CONFIG_FILENAME))
}

/// Reads every config that applies to `cwd`, highest precedence first.
///
/// A file that cannot be read or parsed is an error; discovery never skips
/// over a broken file to reach the ones above it.
pub fn discover_configs(cwd: &Path) -> Result<Vec<ParsedConfig>, ConfigError> {
    discover_with_global(cwd, global_config_path().as_deref())
}

/// Discovery with an explicit global config location.
fn discover_with_global(
    cwd: &Path,
    global: Option<&Path>,
) -> Result<Vec<ParsedConfig>, ConfigError> {
    let mut found = Vec::new();

    for path in cwd
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .filter(|path| path.is_file())
    {
        let scope = if global == Some(path.as_path()) {
            ConfigScope::Global
        } else {
            ConfigScope::Local
        };
        let parsed = ParsedConfig::read(path, scope)?;
        let stop = parsed.is_root();
        found.push(parsed);
        if stop {
            return Ok(found);
        }
    }

    if let Some(global) = global
        && global.is_file()
        && !found.iter().any(|parsed| parsed.path == global)
    {
        found.push(ParsedConfig::read(global.to_path_buf(), ConfigScope::Global)?);
    }

    Ok(found)
}
