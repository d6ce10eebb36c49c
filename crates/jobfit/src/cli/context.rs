//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use jobfit::{Catalog, DEMO_CATALOG_NAME};
use jobfit_config::{Config, ConfigError, ParsedConfig, discover_configs, merge_configs};
use tracing::{debug, info};

/// A catalog together with a display name for where it came from.
pub struct LoadedCatalog {
    /// The parsed catalog.
    pub catalog: Catalog,
    /// File path, or the demo catalog marker.
    pub source: String,
}

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(cwd = %cwd.display(), root = ?config.config_root, "loaded configuration");
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands like `init`, `check` and `status` that should work
    /// even when an existing config file is invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Loads the job catalog.
    ///
    /// Precedence: the command-line path, then `[catalog] path` from config,
    /// then the bundled demo catalog.
    pub fn load_catalog(&self, cli_path: Option<&Path>) -> Result<LoadedCatalog, ExitCode> {
        let path = cli_path
            .map(|p| self.cwd.join(p))
            .or_else(|| self.config.catalog.clone());

        let loaded = match path {
            Some(path) => Catalog::load(&path).map(|catalog| LoadedCatalog {
                catalog,
                source: path.display().to_string(),
            }),
            None => {
                info!("no catalog configured, using the demo catalog");
                Catalog::demo().map(|catalog| LoadedCatalog {
                    catalog,
                    source: DEMO_CATALOG_NAME.to_string(),
                })
            }
        };

        loaded.map_err(|e| {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        })
    }
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
pub fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| config_failure(&e))
}

/// Reads the config files that apply to `cwd` or exits with an error.
pub fn discover_configs_or_failure(cwd: &Path) -> Result<Vec<ParsedConfig>, ExitCode> {
    discover_configs(cwd).map_err(|e| config_failure(&e))
}

/// Merges already parsed config files or exits with an error.
pub fn merge_configs_or_failure(found: &[ParsedConfig]) -> Result<Config, ExitCode> {
    merge_configs(found).map_err(|e| config_failure(&e))
}

/// Reports a configuration error.
fn config_failure(e: &ConfigError) -> ExitCode {
    eprintln!("error: failed to load configuration: {e}");
    ExitCode::FAILURE
}
