use super::Config;
use crate::error::CardFetchError;
use config::Config as ConfigBuilder;

pub const DEFAULT_CONFIG_NAME: &str = "cardfetch";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CARD_DELAY_MS: u64 = 300;

fn default_user_agent() -> String {
    format!("cardfetch/{}", env!("CARGO_PKG_VERSION"))
}

/// Loads settings on top of the built-in defaults.
///
/// With an explicit path the file must exist. Without one, `cardfetch.toml`
/// (or any other extension the `config` crate knows) in the working
/// directory is picked up when present.
pub fn load_config(config_path: Option<&str>) -> Result<Config, CardFetchError> {
    let file = match config_path {
        Some(path) => config::File::with_name(path).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    let config_builder = ConfigBuilder::builder()
        .set_default("http.timeout_secs", DEFAULT_TIMEOUT_SECS)?
        .set_default("http.user_agent", default_user_agent())?
        .set_default("pacing.card_delay_ms", DEFAULT_CARD_DELAY_MS)?
        .add_source(file)
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}
