//! Starter files written by `jobfit init`.
//!
//! `templates/local.toml` and `templates/global.toml` are live configs that
//! spell out every default. `jobfit init` writes them disabled, one `# ` per
//! setting, so a fresh file changes nothing until a line is uncommented.

use crate::ConfigScope;

/// Starter file for a project directory.
const LOCAL: &str = include_str!("../templates/local.toml");

/// Starter file for `~/.jobfit.toml`.
const GLOBAL: &str = include_str!("../templates/global.toml");

/// Returns the starter config for `scope` with every setting disabled.
pub fn starter_config(scope: ConfigScope) -> String {
    let source = match scope {
        ConfigScope::Local => LOCAL,
        ConfigScope::Global => GLOBAL,
    };
    source.lines().map(disable_line).fold(String::new(), |mut out, line| {
        out.push_str(&line);
        out.push('\n');
        out
    })
}

/// Prefixes a TOML line with `# ` unless it is blank or already a comment.
fn disable_line(line: &str) -> String {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        line.to_string()
    } else {
        format!("# {line}")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        Backend, DEFAULT_DIMENSIONS, DEFAULT_LIMIT, ParsedConfig, merge_configs, parse::parse_config,
    };

    #[test]
    fn live_templates_spell_out_the_defaults() {
        for source in [LOCAL, GLOBAL] {
            let config = merge_configs(&[ParsedConfig {
                path: PathBuf::from("/project/.jobfit.toml"),
                scope: ConfigScope::Local,
                config: parse_config(source).unwrap(),
            }])
            .unwrap();
            assert_eq!(config.settings.limit, DEFAULT_LIMIT);
            assert_eq!(config.scorer.backend, Backend::default());
            assert_eq!(config.scorer.dimensions, DEFAULT_DIMENSIONS);
            assert!(!config.scorer.extended_stopwords);
        }
    }

    #[test]
    fn starter_configs_set_nothing() {
        for scope in [ConfigScope::Local, ConfigScope::Global] {
            let config = parse_config(&starter_config(scope)).unwrap();
            assert!(config.root.is_none());
            assert!(config.settings.is_none());
            assert!(config.scorer.is_none());
            assert!(config.catalog.is_none());
        }
    }

    #[test]
    fn disable_line_leaves_comments_and_blanks() {
        assert_eq!(disable_line("# note"), "# note");
        assert_eq!(disable_line("   # indented note"), "   # indented note");
        assert_eq!(disable_line(""), "");
        assert_eq!(disable_line("  "), "  ");
        assert_eq!(disable_line("[scorer]"), "# [scorer]");
        assert_eq!(disable_line("limit = 10"), "# limit = 10");
    }
}
