use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verbosity of the bridge's log output.
///
/// Only consulted when `RUST_LOG` is absent; an explicit filter in the
/// environment always wins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Startup failures and faults that end a connection.
    Error,

    /// Provider faults and helper timeouts.
    Warn,

    /// Server lifecycle and connection open/close (default level).
    #[default]
    Info,

    /// Every routed command and its outcome.
    Debug,

    /// Raw helper output and D-Bus traffic.
    Trace,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}
