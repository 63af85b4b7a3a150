//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`MDMAKER_DEFAULTS__PAD_WIDTH=3`, ...)
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mdmaker_core::domain::{MAX_COUNT, ROOT_LOCATION, parse_count};

use crate::error::{CliError, CliResult};

const ENV_PREFIX: &str = "MDMAKER";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Values used when a flag is not given.
    pub defaults: Defaults,
    /// Where the vault lives.
    pub vault: VaultConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub file_count: u32,
    pub base_name: String,
    pub target_folder: String,
    pub number_format: String,
    pub pad_width: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            file_count: 5,
            base_name: "ファイル".into(),
            target_folder: ROOT_LOCATION.into(),
            number_format: "（n）".into(),
            pad_width: 2,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

/// Keys accepted by `config get` / `config set`.
pub const KEYS: &[&str] = &[
    "defaults.file_count",
    "defaults.base_name",
    "defaults.target_folder",
    "defaults.number_format",
    "defaults.pad_width",
    "vault.root",
    "output.no_color",
    "output.format",
];

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  The default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let settings = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(config_file.is_some()),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("reading configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("configuration has unexpected values")?;
        config.validate()?;
        Ok(config)
    }

    /// Read only the file at `path` (no environment), for editing.
    pub fn from_file_or_default(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| CliError::IoError {
            message: format!("Failed to read config '{}'", path.display()),
            source: e,
        })?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Write this configuration as TOML, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        let toml = toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CliError::IoError {
                message: format!("Failed to create config directory '{}'", parent.display()),
                source: e,
            })?;
        }

        std::fs::write(path, toml).map_err(|e| CliError::IoError {
            message: format!("Failed to write config to '{}'", path.display()),
            source: e,
        })
    }

    /// Reject settings the core would refuse anyway.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            (1..=MAX_COUNT).contains(&self.defaults.file_count),
            "defaults.file_count must be between 1 and {MAX_COUNT}, got {}",
            self.defaults.file_count
        );
        anyhow::ensure!(
            self.defaults.pad_width >= 0,
            "defaults.pad_width must not be negative, got {}",
            self.defaults.pad_width
        );
        Ok(())
    }

    /// Read a dotted key.
    pub fn get(&self, key: &str) -> CliResult<String> {
        let d = &self.defaults;
        match key {
            "defaults.file_count" => Ok(d.file_count.to_string()),
            "defaults.base_name" => Ok(d.base_name.clone()),
            "defaults.target_folder" => Ok(d.target_folder.clone()),
            "defaults.number_format" => Ok(d.number_format.clone()),
            "defaults.pad_width" => Ok(d.pad_width.to_string()),
            "vault.root" => Ok(self
                .vault
                .root
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "output.no_color" => Ok(self.output.no_color.to_string()),
            "output.format" => Ok(self.output.format.clone()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a dotted key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> CliResult<()> {
        let d = &mut self.defaults;
        match key {
            "defaults.file_count" => d.file_count = parse_count(value).map_err(invalid_value)?,
            "defaults.base_name" => {
                if value.trim().is_empty() {
                    return Err(invalid("defaults.base_name must not be blank"));
                }
                d.base_name = value.to_string();
            }
            "defaults.target_folder" => d.target_folder = value.to_string(),
            "defaults.number_format" => d.number_format = value.to_string(),
            "defaults.pad_width" => {
                d.pad_width = value
                    .trim()
                    .parse::<i64>()
                    .ok()
                    .filter(|w| *w >= 0)
                    .ok_or_else(|| invalid(format!("'{value}' is not a valid pad width")))?;
            }
            "vault.root" => {
                self.vault.root = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "output.no_color" => {
                self.output.no_color = value
                    .parse()
                    .map_err(|_| invalid(format!("'{value}' is not true/false")))?;
            }
            "output.format" => self.output.format = value.to_string(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mdmaker.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mdmaker", "mdmaker")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".mdmaker.toml"))
    }

    /// `--config` if given, else the default location.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn invalid(message: impl Into<String>) -> CliError {
    CliError::InvalidInput {
        message: message.into(),
        source: None,
    }
}

fn invalid_value(e: mdmaker_core::domain::DomainError) -> CliError {
    CliError::InvalidInput {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_settings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.file_count, 5);
        assert_eq!(cfg.defaults.base_name, "ファイル");
        assert_eq!(cfg.defaults.target_folder, "/");
        assert_eq!(cfg.defaults.number_format, "（n）");
        assert_eq!(cfg.defaults.pad_width, 2);
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        // An explicit path must exist.
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn load_merges_file_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\npad_width = 3\nbase_name = \"memo\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.defaults.pad_width, 3);
        assert_eq!(cfg.defaults.base_name, "memo");
        assert_eq!(cfg.defaults.file_count, 5);
    }

    #[test]
    fn load_rejects_negative_pad() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\npad_width = -2\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn set_then_get_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let mut cfg = AppConfig::from_file_or_default(&path).unwrap();
        cfg.set("defaults.number_format", "-n").unwrap();
        cfg.set("defaults.file_count", "１０").unwrap();
        cfg.save(&path).unwrap();

        let reloaded = AppConfig::from_file_or_default(&path).unwrap();
        assert_eq!(reloaded.get("defaults.number_format").unwrap(), "-n");
        assert_eq!(reloaded.get("defaults.file_count").unwrap(), "10");
    }

    #[test]
    fn set_rejects_bad_values() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set("defaults.pad_width", "-1").is_err());
        assert!(cfg.set("defaults.file_count", "0").is_err());
        assert!(cfg.set("defaults.base_name", "  ").is_err());
        assert!(matches!(
            cfg.set("nope", "1"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
