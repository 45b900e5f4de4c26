/// Request line decoding
pub mod command;
/// Per-verb request handlers
pub mod handlers;
/// LAN address discovery and bind address resolution
pub mod net;
/// Response envelopes and wire encoding
pub mod response;
/// Command dispatch
pub mod router;
/// WebSocket listener
pub mod server;
/// Per-connection request loop
pub mod session;
/// Connection abstraction
pub mod transport;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use command::Command;
pub use handlers::Handlers;
pub use response::{ActionResult, NowPlaying, PlaybackState, Reply};
pub use router::CommandRouter;
pub use server::BridgeServer;
pub use session::Session;
pub use transport::{ChannelClient, ChannelTransport, Transport, TransportClosed};

use crate::{
    config::Config,
    services::{DeviceCache, MprisProvider, PactlProvider},
};

/// Assemble the production router: MPRIS for media, `pactl` behind a
/// [`DeviceCache`] for audio devices.
pub fn build_router(config: &Config) -> CommandRouter {
    let mpris = Arc::new(MprisProvider::new(&config.media));
    let pactl = Arc::new(PactlProvider::new(config.audio.helper.clone()));
    let devices = Arc::new(DeviceCache::new(
        pactl,
        config.audio.cache_ttl(),
        config.audio.helper_timeout(),
    ));

    CommandRouter::new(Handlers::new(mpris.clone(), mpris, devices))
}
