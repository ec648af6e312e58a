//! Rich-results checker settings.

use serde::{Deserialize, Serialize};

const fn default_enabled() -> bool {
    true
}

const fn default_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RichResultsConfig {
    /// When disabled the pipeline skips the external checker entirely.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Upper bound on the external call before the section degrades.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for RichResultsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl RichResultsConfig {
    #[must_use]
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_ms)
    }
}
