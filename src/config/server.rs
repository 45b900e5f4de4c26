use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default WebSocket port clients connect to.
pub const DEFAULT_PORT: u16 = 8765;

/// Address used to discover the LAN-facing interface.
///
/// Nothing is ever sent there; a UDP socket is only "connected" so the
/// kernel picks a route and a local address.
pub const DEFAULT_PROBE_ADDRESS: &str = "8.8.8.8:80";

/// Listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind. When unset, the LAN-facing address is probed and
    /// `127.0.0.1` is used if probing fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// TCP port for the WebSocket endpoint.
    pub port: u16,

    /// External `host:port` used for the outbound-route probe.
    pub probe_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_PORT,
            probe_address: DEFAULT_PROBE_ADDRESS.to_string(),
        }
    }
}
