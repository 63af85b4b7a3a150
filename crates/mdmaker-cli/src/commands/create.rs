//! Implementation of the `mdmaker create` command.
//!
//! Translate flags into a `BatchRequest`, run it through the core
//! `BatchService` over a `LocalVault`, and print the report.

use tracing::{info, instrument, warn};

use mdmaker_core::{
    application::{BatchService, DEFAULT_PREVIEW_LIMIT, services::preview},
    domain::{BatchReport, ROOT_LOCATION},
};

use crate::{
    cli::{CreateArgs, GlobalArgs},
    commands::{build_request, open_vault, print_preview},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `mdmaker create` command.
///
/// 1. Resolve the vault and the request (flags over config defaults)
/// 2. Fall back to the vault root if the target folder is missing
/// 3. Show the preview and confirm unless `--yes`, `--quiet` or no TTY
/// 4. Stop on `--dry-run`
/// 5. Run the batch and report; per-note failures do not fail the command
#[instrument(skip_all)]
pub fn execute(
    args: CreateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let vault = open_vault(&global, &config)?;

    let mut folder = args
        .folder
        .clone()
        .unwrap_or_else(|| config.defaults.target_folder.clone());
    if !vault.is_folder(&folder) {
        warn!(%folder, "Target folder not found, using vault root");
        output.warning(&format!(
            "Folder '{folder}' not found in the vault; using the vault root"
        ))?;
        folder = ROOT_LOCATION.to_string();
    }

    let request = build_request(&args.naming, &folder, &config)?;
    let names = preview(&request, DEFAULT_PREVIEW_LIMIT)?;

    if !output.is_json() {
        output.header(&format!(
            "{} note(s) in {} ({})",
            request.count,
            folder,
            vault.root().display()
        ))?;
        print_preview(&names, &output)?;
    }

    if args.dry_run {
        if output.is_json() {
            output.json(&serde_json::json!({
                "dry_run": true,
                "folder": folder,
                "names": request.candidate_names().collect::<Vec<_>>(),
            }))?;
        } else {
            output.info("Dry run: no notes were created")?;
        }
        return Ok(());
    }

    if !args.yes && !global.quiet && !output.is_json() && stdin_is_terminal() && !confirm()? {
        return Err(CliError::Cancelled);
    }

    if args.save {
        save_naming_defaults(&args, &global, &output)?;
    }

    let service = BatchService::new(Box::new(vault));
    let report = service.run(&request)?;
    info!(
        created = report.created.len(),
        failed = report.failed.len(),
        "Batch reported"
    );

    if output.is_json() {
        output.json(&report)?;
    } else {
        print_report(&report, &output)?;
    }
    Ok(())
}

/// "N notes created", then "M notes failed" with one line per failure.
fn print_report(report: &BatchReport, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("{} notes created", report.created.len()))?;
    if !report.failed.is_empty() {
        output.error(&format!("{} notes failed", report.failed.len()))?;
        for item in &report.failed {
            output.error(&format!("  {item}"))?;
        }
    }
    Ok(())
}

/// Persist `--format` / `--pad` into the config file.
fn save_naming_defaults(
    args: &CreateArgs,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    let path = AppConfig::active_path(global.config.as_ref());
    let mut stored = AppConfig::from_file_or_default(&path)?;

    if let Some(format) = &args.naming.format {
        stored.defaults.number_format = format.clone();
    }
    if let Some(pad) = args.naming.pad {
        stored.set("defaults.pad_width", &pad.to_string())?;
    }
    stored.save(&path)?;

    output.info(&format!("Saved naming defaults to {}", path.display()))?;
    Ok(())
}

fn stdin_is_terminal() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stdin())
}

#[cfg(feature = "interactive")]
fn confirm() -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt("Create these notes?")
        .default(true)
        .interact()
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation".into(),
            source: std::io::Error::other(e),
        })
}

#[cfg(not(feature = "interactive"))]
fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Create these notes? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}
