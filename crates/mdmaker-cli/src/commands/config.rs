//! `mdmaker config`: read and write configuration values.
//!
//! `get` and `list` show the effective configuration (file plus env);
//! `set` edits the file only.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::{AppConfig, KEYS},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(global.config.as_ref());

    match cmd {
        ConfigCommands::Get { key } => {
            let value = config.get(&key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&value)?;
            }
        }

        ConfigCommands::Set { key, value } => {
            let mut stored = AppConfig::from_file_or_default(&path)?;
            stored.set(&key, &value)?;
            stored.save(&path)?;
            output.success(&format!("{key} = {}", stored.get(&key)?))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            for key in KEYS {
                output.print(&format!("{key} = {:?}", config.get(key)?))?;
            }
        }

        ConfigCommands::Path => {
            if output.is_json() {
                output.json(&serde_json::json!({ "path": path }))?;
            } else {
                output.print(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn every_listed_key_is_readable() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(cfg.get(key).is_ok(), "unreadable key {key}");
        }
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            cfg.get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn defaults_serialise_without_vault_root() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        assert!(toml.contains("number_format = \"（n）\""));
        assert!(!toml.contains("root"));
    }
}
