//! `mdmaker preview`: show the names a batch would create.
//!
//! Nothing touches the vault, so no `--vault` is needed.

use mdmaker_core::{application::services::preview, domain::ROOT_LOCATION};

use crate::{
    cli::PreviewArgs,
    commands::{build_request, print_preview},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: PreviewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let request = build_request(&args.naming, ROOT_LOCATION, &config)?;
    let names = preview(&request, args.limit)?;

    if output.is_json() {
        output.json(&names)?;
    } else {
        print_preview(&names, &output)?;
    }
    Ok(())
}
