use crate::cli::args::Command;
use crate::cli::params::FetchParams;
use crate::config::load_config;
use crate::download::{EntryTable, PacingPolicy, validate_tables};
use crate::error::CardFetchError;

/// Loads settings and pairs them with the built-in tables.
pub fn resolve_command(command: Command) -> Result<FetchParams, CardFetchError> {
    build_params(command).inspect_err(|e| tracing::error!("{}", e.fatal_message()))
}

fn build_params(command: Command) -> Result<FetchParams, CardFetchError> {
    let app_config = load_config(command.config_path.as_deref())?;

    let tables = EntryTable::builtin();
    validate_tables(&tables)?;

    Ok(FetchParams {
        tables,
        pacing: PacingPolicy::cards(app_config.pacing.card_delay()),
        http: app_config.http,
    })
}
