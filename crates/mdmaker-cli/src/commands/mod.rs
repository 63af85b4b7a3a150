//! Command handlers, one module per subcommand.
//!
//! Helpers shared by `create` and `preview` live here: turning flags plus
//! config defaults into a [`BatchRequest`], and opening the vault.

use std::path::PathBuf;

use tracing::debug;

use mdmaker_adapters::LocalVault;
use mdmaker_core::{
    application::Preview,
    domain::{BatchRequest, parse_count},
    error::MdMakerError,
};

use crate::{
    cli::{GlobalArgs, NamingArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli as _},
    output::OutputManager,
};

pub mod completions;
pub mod config;
pub mod create;
pub mod folders;
pub mod init;
pub mod preview;

/// Fill unset naming flags from `config.defaults` and build the request.
///
/// The request is not validated here; the core does that.
pub(crate) fn build_request(
    naming: &NamingArgs,
    folder: &str,
    config: &AppConfig,
) -> CliResult<BatchRequest> {
    let defaults = &config.defaults;

    let count = match naming.count.as_deref() {
        Some(text) => parse_count(text).map_err(MdMakerError::from)?,
        None => defaults.file_count,
    };
    let base = naming
        .base_name
        .clone()
        .unwrap_or_else(|| defaults.base_name.clone());
    let template = naming
        .format
        .clone()
        .unwrap_or_else(|| defaults.number_format.clone());
    let pad = naming.pad.unwrap_or(defaults.pad_width);

    Ok(BatchRequest::new(folder, base, count)
        .with_template(template)
        .with_pad_width(pad))
}

/// Vault root: `--vault`, then `vault.root`, then the current directory.
pub(crate) fn vault_root(global: &GlobalArgs, config: &AppConfig) -> CliResult<PathBuf> {
    let root = match global.vault.clone().or_else(|| config.vault.root.clone()) {
        Some(root) => root,
        None => std::env::current_dir()
            .with_cli_context(|| "Failed to determine the current directory")?,
    };

    if !root.is_dir() {
        return Err(CliError::VaultNotFound { path: root });
    }
    debug!(root = %root.display(), "Vault resolved");
    Ok(root)
}

pub(crate) fn open_vault(global: &GlobalArgs, config: &AppConfig) -> CliResult<LocalVault> {
    vault_root(global, config).map(LocalVault::new)
}

/// Print a preview as `  name` lines plus the "... and N more" tail.
pub(crate) fn print_preview(preview: &Preview, output: &OutputManager) -> CliResult<()> {
    for name in &preview.names {
        output.print(&format!("  {name}"))?;
    }
    if preview.remaining > 0 {
        output.print(&format!("  ... and {} more", preview.remaining))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn naming(base: Option<&str>, count: Option<&str>) -> NamingArgs {
        NamingArgs {
            base_name: base.map(Into::into),
            count: count.map(Into::into),
            format: None,
            pad: None,
        }
    }

    fn global(vault: Option<PathBuf>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            vault,
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn unset_flags_come_from_config() {
        let req = build_request(&naming(None, None), "/", &AppConfig::default()).unwrap();
        assert_eq!(req.base_name, "ファイル");
        assert_eq!(req.count, 5);
        assert_eq!(req.template.as_str(), "（n）");
        assert_eq!(req.pad_width, 2);
    }

    #[test]
    fn flags_override_config() {
        let mut args = naming(Some("memo"), Some("３"));
        args.format = Some("-n".into());
        args.pad = Some(0);

        let req = build_request(&args, "inbox", &AppConfig::default()).unwrap();

        assert_eq!(req.target_location, "inbox");
        assert_eq!(req.count, 3);
        assert_eq!(req.candidate_names().collect::<Vec<_>>(), ["memo-1.md", "memo-2.md", "memo-3.md"]);
    }

    #[test]
    fn bad_count_is_a_user_error() {
        let err = build_request(&naming(None, Some("abc")), "/", &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn vault_flag_wins_over_config() {
        let flag = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.vault.root = Some(PathBuf::from("/definitely/not/here"));

        let root = vault_root(&global(Some(flag.path().to_path_buf())), &config).unwrap();
        assert_eq!(root, flag.path());
    }

    #[test]
    fn missing_vault_is_reported() {
        let err = vault_root(&global(Some("/definitely/not/here".into())), &AppConfig::default())
            .unwrap_err();
        assert!(matches!(err, CliError::VaultNotFound { .. }));
    }
}
