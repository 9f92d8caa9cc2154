use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub http: HttpSettings,
    pub pacing: PacingSettings,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HttpSettings {
    /// Upper bound for a single request, connect through last body byte
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PacingSettings {
    /// Pause after each successful card download, in milliseconds
    pub card_delay_ms: u64,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl PacingSettings {
    pub fn card_delay(&self) -> Duration {
        Duration::from_millis(self.card_delay_ms)
    }
}
