use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Audio output device settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Program used to enumerate and switch output devices.
    pub helper: String,

    /// How long a device enumeration is served from memory, in seconds.
    pub cache_ttl_secs: u64,

    /// Upper bound for a single helper invocation, in seconds.
    pub helper_timeout_secs: u64,
}

impl AudioConfig {
    /// Cache lifetime as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Helper timeout as a `Duration`.
    pub fn helper_timeout(&self) -> Duration {
        Duration::from_secs(self.helper_timeout_secs)
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            helper: "pactl".to_string(),
            cache_ttl_secs: 10,
            helper_timeout_secs: 10,
        }
    }
}
