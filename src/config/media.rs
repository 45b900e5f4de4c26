use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Media session configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct MediaConfig {
    /// Regular expressions matched against MPRIS bus names; matching
    /// players are never reported as the active session.
    pub ignored_players: Vec<String>,

    /// Upper bound for downloading remote album artwork, in seconds.
    pub artwork_timeout_secs: u64,
}

impl MediaConfig {
    /// Artwork download timeout as a `Duration`.
    pub fn artwork_timeout(&self) -> Duration {
        Duration::from_secs(self.artwork_timeout_secs)
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            ignored_players: Vec::new(),
            artwork_timeout_secs: 5,
        }
    }
}
