//! `mdmaker folders`: list the folders a batch can target.

use mdmaker_core::{application::BatchService, domain::ROOT_LOCATION};

use crate::{
    cli::GlobalArgs,
    commands::open_vault,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(global: GlobalArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = BatchService::new(Box::new(open_vault(&global, &config)?));

    let mut folders = vec![ROOT_LOCATION.to_string()];
    folders.extend(service.folders()?);

    if output.is_json() {
        output.json(&folders)?;
        return Ok(());
    }

    // Plain names are easier to pipe.
    for folder in &folders {
        output.print(folder)?;
    }
    Ok(())
}
