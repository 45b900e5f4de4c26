mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Process-wide settings for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is not set.
    #[serde(default)]
    pub log_level: LogLevel,
}
