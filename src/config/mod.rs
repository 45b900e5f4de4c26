//! Configuration schema definitions and loading.
//!
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working bridge on port 8765.

mod audio;
mod general;
mod loading;
mod media;
mod paths;
mod server;

#[cfg(test)]
mod tests;

pub use audio::AudioConfig;
pub use general::{GeneralConfig, LogLevel};
pub use media::MediaConfig;
pub use paths::ConfigPaths;
pub use server::{DEFAULT_PORT, DEFAULT_PROBE_ADDRESS, ServerConfig};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// WebSocket listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Output device enumeration and switching.
    #[serde(default)]
    pub audio: AudioConfig,

    /// Media session discovery and artwork.
    #[serde(default)]
    pub media: MediaConfig,
}
