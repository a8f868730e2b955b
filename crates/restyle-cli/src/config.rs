//! Configuration file support for restyle
//!
//! Loads `.restyle.toml` from current directory or parent directories.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".restyle.toml";
pub const DEFAULT_TARGET: &str = "lib/email.ts";

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File to rewrite (default: lib/email.ts)
    pub target: Option<PathBuf>,
    pub report: ReportConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub unmatched: UnmatchedPolicy,
}

/// What to do when a rule finds nothing to replace
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Say nothing and write the file anyway
    #[default]
    Ignore,
    /// Print a warning per unmatched rule, still write
    Warn,
    /// Fail without writing
    Error,
}

impl Config {
    /// Load config from `.restyle.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// The file to rewrite: CLI path, then config, then the built-in default
    pub fn effective_target(&self, cli_path: Option<&Path>) -> PathBuf {
        cli_path
            .map(Path::to_path_buf)
            .or_else(|| self.target.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }

    /// Unmatched-rule policy after CLI overrides (`--strict` wins over `--warn-unmatched`)
    pub fn effective_unmatched(&self, strict: bool, warn: bool) -> UnmatchedPolicy {
        if strict {
            UnmatchedPolicy::Error
        } else if warn {
            UnmatchedPolicy::Warn
        } else {
            self.report.unmatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.effective_target(None), PathBuf::from("lib/email.ts"));
        assert_eq!(config.report.unmatched, UnmatchedPolicy::Ignore);
    }

    #[test]
    fn test_parse_full() {
        let config: Config = toml::from_str(
            r#"
            target = "templates/mail.ts"

            [report]
            unmatched = "warn"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.effective_target(None),
            PathBuf::from("templates/mail.ts")
        );
        assert_eq!(config.report.unmatched, UnmatchedPolicy::Warn);
    }

    #[test]
    fn test_report_section_alone_keeps_default_target() {
        let config: Config = toml::from_str("[report]\nunmatched = \"error\"\n").unwrap();
        assert_eq!(config.effective_target(None), PathBuf::from("lib/email.ts"));
        assert_eq!(config.report.unmatched, UnmatchedPolicy::Error);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        let result: Result<Config, _> = toml::from_str("[report]\nunmatched = \"loud\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_path_overrides_config() {
        let config: Config = toml::from_str("target = \"a.ts\"").unwrap();
        assert_eq!(
            config.effective_target(Some(Path::new("b.ts"))),
            PathBuf::from("b.ts")
        );
    }

    #[test]
    fn test_effective_unmatched() {
        let config: Config = toml::from_str("[report]\nunmatched = \"warn\"\n").unwrap();

        assert_eq!(config.effective_unmatched(false, false), UnmatchedPolicy::Warn);
        assert_eq!(config.effective_unmatched(true, true), UnmatchedPolicy::Error);
        assert_eq!(
            Config::default().effective_unmatched(false, true),
            UnmatchedPolicy::Warn
        );
    }

    #[test]
    fn test_load_from_parent_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("app").join("lib");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join(CONFIG_FILE), "target = \"x.ts\"\n").unwrap();

        let (config, path) = Config::load_from(nested).unwrap().unwrap();
        assert_eq!(path, temp.path().join(CONFIG_FILE));
        assert_eq!(config.target, Some(PathBuf::from("x.ts")));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "target = [").unwrap();

        let err = Config::load_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to parse"));
    }
}
