use tracing::{debug, info, instrument};

use super::{CommandRouter, Transport};

/// Per-connection request/response loop.
///
/// `Open → (read, route, write)* → Closed`. Each request is answered in full
/// before the next one is read, so responses on one connection are always
/// in request order.
pub struct Session<T> {
    transport: T,
    router: CommandRouter,
    peer: String,
}

impl<T: Transport> Session<T> {
    /// Open a session for `peer` over `transport`
    pub fn new(transport: T, router: CommandRouter, peer: impl Into<String>) -> Self {
        Self {
            transport,
            router,
            peer: peer.into(),
        }
    }

    /// Serve requests until the peer disconnects; returns how many requests
    /// were answered.
    ///
    /// A closed or failed transport is the normal way for a session to end
    /// and is never reported as an error.
    #[instrument(skip(self), fields(peer = %self.peer))]
    pub async fn run(mut self) -> usize {
        info!("client connected");
        let mut served = 0;

        while let Some(request) = self.transport.next_request().await {
            let response = self.router.dispatch(&request).await;

            if let Err(e) = self.transport.send_response(response).await {
                debug!(error = %e, "response not delivered");
                break;
            }
            served += 1;
        }

        info!(served, "client disconnected");
        served
    }
}
