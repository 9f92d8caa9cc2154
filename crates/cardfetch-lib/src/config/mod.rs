mod loader;
mod model;

pub use loader::{DEFAULT_CARD_DELAY_MS, DEFAULT_TIMEOUT_SECS, load_config};
pub use model::{Config, HttpSettings, PacingSettings};
