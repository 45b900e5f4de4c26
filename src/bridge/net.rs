use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use tokio::net::{UdpSocket, lookup_host};
use tracing::{debug, warn};

use crate::{BridgeError, Result};

/// Discovers the address of the interface that routes to `probe`.
///
/// Connecting a UDP socket only selects a route; no datagram is sent.
/// Returns `None` when there is no route (offline machine, bad probe).
pub async fn lan_address(probe: &str) -> Option<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).await.ok()?;

    if let Err(e) = socket.connect(probe).await {
        debug!(probe, error = %e, "route probe failed");
        return None;
    }

    let ip = socket.local_addr().ok()?.ip();
    (!ip.is_unspecified()).then_some(ip)
}

/// Picks the socket address to bind.
///
/// An explicit `host` is resolved as given. Without one, the LAN-facing
/// address is probed, falling back to loopback.
///
/// # Errors
/// Returns `BridgeError::InvalidBindAddress` if an explicit host does not resolve
pub async fn resolve_bind_address(host: Option<&str>, port: u16, probe: &str) -> Result<SocketAddr> {
    if let Some(host) = host {
        let invalid = |details: String| BridgeError::InvalidBindAddress {
            address: format!("{host}:{port}"),
            details,
        };

        return lookup_host((host, port))
            .await
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("no addresses found".to_string()));
    }

    match lan_address(probe).await {
        Some(ip) => Ok(SocketAddr::new(ip, port)),
        None => {
            warn!("Could not determine LAN address, binding to localhost");
            Ok(SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port))
        }
    }
}
