//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// How the billing report is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log file read when no path is given on the command line.
    pub log_path: PathBuf,
    /// Report format used when `--json` is not given.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("test.log"),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(dirs_config_path().as_deref(), config_path).extract()
    }

    fn figment(config_dir: Option<&Path>, config_path: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = config_dir {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (FB_*)
        figment.merge(Env::prefixed("FB_"))
    }
}

/// Returns the platform-specific config directory for fair-billing.
///
/// On Linux: `~/.config/fair-billing`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fair-billing"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_app_name() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "fair-billing");
    }

    #[test]
    fn test_defaults_without_sources() {
        figment::Jail::expect_with(|_jail| {
            let config: Config = Config::figment(None, None).extract()?;
            assert_eq!(config, Config::default());
            assert_eq!(config.log_path, PathBuf::from("test.log"));
            assert_eq!(config.format, OutputFormat::Table);
            Ok(())
        });
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "billing.toml",
                r#"
                log_path = "/var/log/sessions.log"
                format = "json"
                "#,
            )?;

            let config: Config =
                Config::figment(None, Some(Path::new("billing.toml"))).extract()?;
            assert_eq!(config.log_path, PathBuf::from("/var/log/sessions.log"));
            assert_eq!(config.format, OutputFormat::Json);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_config_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("billing.toml", r#"log_path = "from-file.log""#)?;
            jail.set_env("FB_LOG_PATH", "from-env.log");

            let config: Config =
                Config::figment(None, Some(Path::new("billing.toml"))).extract()?;
            assert_eq!(config.log_path, PathBuf::from("from-env.log"));
            Ok(())
        });
    }

    #[test]
    fn test_default_location_is_read() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir("conf")?;
            jail.create_file("conf/config.toml", r#"format = "json""#)?;

            let config: Config = Config::figment(Some(Path::new("conf")), None).extract()?;
            assert_eq!(config.format, OutputFormat::Json);
            Ok(())
        });
    }
}
