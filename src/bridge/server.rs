use std::{future::Future, net::SocketAddr};

use axum::{
    Router,
    extract::{ConnectInfo, State, WebSocketUpgrade},
    response::Response,
};
use tokio::net::TcpListener;
use tracing::{error, info};

use super::{CommandRouter, Session};
use crate::{BridgeError, Result};

/// WebSocket listener bound to its address, ready to serve.
///
/// Clients may connect on any path. Every accepted connection gets its own
/// task running a [`Session`]; sessions share nothing but the router's
/// collaborators.
pub struct BridgeServer {
    listener: TcpListener,
    router: CommandRouter,
    local_addr: SocketAddr,
}

impl BridgeServer {
    /// Bind the listening socket.
    ///
    /// # Errors
    /// Returns `BridgeError::Bind` if the address is unavailable
    pub async fn bind(address: SocketAddr, router: CommandRouter) -> Result<Self> {
        let bind_error = |source| BridgeError::Bind { address, source };

        let listener = TcpListener::bind(address).await.map_err(bind_error)?;
        let local_addr = listener.local_addr().map_err(bind_error)?;

        Ok(Self {
            listener,
            router,
            local_addr,
        })
    }

    /// Address actually bound; differs from the requested one for port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections until `shutdown` resolves.
    ///
    /// # Errors
    /// Returns error if the accept loop itself fails
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = Router::new().fallback(upgrade).with_state(self.router);

        info!("WebSocket server started at ws://{}", self.local_addr);

        axum::serve(
            self.listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| error!(error = %e, "WebSocket server failed"))?;

        info!("WebSocket server stopped");
        Ok(())
    }
}

async fn upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(router): State<CommandRouter>,
) -> Response {
    ws.on_upgrade(move |socket| async move {
        Session::new(socket, router, peer.to_string()).run().await;
    })
}
