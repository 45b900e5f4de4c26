use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use tokio::sync::OnceCell;
use tracing::{debug, instrument, warn};
use zbus::{Connection, fdo, proxy::CacheProperties};

use super::{MediaPlayer2PlayerProxy, TrackMetadata, artwork};
use crate::{
    config::MediaConfig,
    services::media::{
        MediaError, MediaProvider, MediaSession, PlaybackAction, PlaybackStatus,
        ThumbnailProvider,
    },
};

/// Bus name prefix shared by every MPRIS player.
const MPRIS_BUS_PREFIX: &str = "org.mpris.MediaPlayer2.";

struct ActivePlayer {
    bus_name: String,
    proxy: MediaPlayer2PlayerProxy<'static>,
    status: PlaybackStatus,
}

/// Media session provider backed by MPRIS players on the session bus.
///
/// The "current session" is the first playing player in bus-name order, or
/// the first player at all when none is playing. The D-Bus connection is
/// opened on first use, so the bridge starts even without a session bus and
/// reports the failure per request instead.
pub struct MprisProvider {
    connection: OnceCell<Connection>,
    ignored_players: Vec<Regex>,
    artwork_timeout: Duration,
}

impl MprisProvider {
    /// Create a provider from media configuration.
    ///
    /// Patterns that fail to compile are skipped with a warning; configuration
    /// validation normally rejects them earlier.
    pub fn new(config: &MediaConfig) -> Self {
        let ignored_players = config
            .ignored_players
            .iter()
            .filter_map(|pattern| match Regex::new(pattern) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    warn!("Ignoring invalid player pattern '{pattern}': {e}");
                    None
                }
            })
            .collect();

        Self {
            connection: OnceCell::new(),
            ignored_players,
            artwork_timeout: config.artwork_timeout(),
        }
    }

    async fn connection(&self) -> Result<&Connection, MediaError> {
        self.connection
            .get_or_try_init(|| async {
                Connection::session().await.map_err(|e| {
                    MediaError::InitializationFailed(format!("D-Bus connection failed: {e}"))
                })
            })
            .await
    }

    fn is_ignored(&self, bus_name: &str) -> bool {
        self.ignored_players.iter().any(|re| re.is_match(bus_name))
    }

    async fn player_names(&self, connection: &Connection) -> Result<Vec<String>, MediaError> {
        let dbus_proxy = fdo::DBusProxy::new(connection).await?;
        let names = dbus_proxy
            .list_names()
            .await
            .map_err(|e| MediaError::DbusError(e.into()))?;

        let mut players: Vec<String> = names
            .into_iter()
            .map(|name| name.to_string())
            .filter(|name| name.starts_with(MPRIS_BUS_PREFIX) && !self.is_ignored(name))
            .collect();
        players.sort();

        Ok(players)
    }

    async fn active_player(&self) -> Result<Option<ActivePlayer>, MediaError> {
        let connection = self.connection().await?;
        let mut fallback = None;

        for bus_name in self.player_names(connection).await? {
            let proxy = MediaPlayer2PlayerProxy::builder(connection)
                .destination(bus_name.clone())?
                .cache_properties(CacheProperties::No)
                .build()
                .await?;

            let status = match proxy.playback_status().await {
                Ok(status) => PlaybackStatus::from(status.as_str()),
                Err(e) => {
                    debug!(%bus_name, error = %e, "skipping unresponsive player");
                    continue;
                }
            };

            let player = ActivePlayer {
                bus_name,
                proxy,
                status,
            };

            if status == PlaybackStatus::Playing {
                return Ok(Some(player));
            }
            fallback.get_or_insert(player);
        }

        Ok(fallback)
    }
}

/// Application id derived from an MPRIS bus name:
/// `org.mpris.MediaPlayer2.firefox.instance_1_84` becomes `firefox`.
pub(crate) fn app_id_from_bus_name(bus_name: &str) -> String {
    let suffix = bus_name.strip_prefix(MPRIS_BUS_PREFIX).unwrap_or(bus_name);
    suffix.split('.').next().unwrap_or(suffix).to_string()
}

#[async_trait]
impl MediaProvider for MprisProvider {
    #[instrument(skip(self))]
    async fn current_session(&self) -> Result<Option<MediaSession>, MediaError> {
        let Some(player) = self.active_player().await? else {
            return Ok(None);
        };

        let metadata = TrackMetadata::from(&player.proxy.metadata().await?);
        let position = match player.proxy.position().await {
            Ok(micros) => Duration::from_micros(u64::try_from(micros).unwrap_or(0)),
            Err(e) => {
                debug!(bus_name = %player.bus_name, error = %e, "position unavailable");
                Duration::ZERO
            }
        };

        Ok(Some(MediaSession {
            status: player.status,
            title: metadata.title,
            artist: metadata.artist,
            app_id: app_id_from_bus_name(&player.bus_name),
            position,
            duration: metadata.length.unwrap_or(Duration::ZERO),
        }))
    }

    #[instrument(skip(self))]
    async fn perform(&self, action: PlaybackAction) -> Result<bool, MediaError> {
        let Some(player) = self.active_player().await? else {
            return Err(MediaError::NoActiveSession);
        };
        let proxy = &player.proxy;

        let capability = match action {
            PlaybackAction::Play => proxy.can_play().await,
            PlaybackAction::Pause => proxy.can_pause().await,
            PlaybackAction::Next => proxy.can_go_next().await,
            PlaybackAction::Previous => proxy.can_go_previous().await,
        };
        if !capability.unwrap_or(true) {
            debug!(bus_name = %player.bus_name, %action, "player declined action");
            return Ok(false);
        }

        let result = match action {
            PlaybackAction::Play => proxy.play().await,
            PlaybackAction::Pause => proxy.pause().await,
            PlaybackAction::Next => proxy.next().await,
            PlaybackAction::Previous => proxy.previous().await,
        };
        result.map_err(|e| MediaError::ControlFailed(format!("{action} failed: {e}")))?;

        Ok(true)
    }
}

#[async_trait]
impl ThumbnailProvider for MprisProvider {
    #[instrument(skip(self))]
    async fn thumbnail(&self) -> Result<Option<Vec<u8>>, MediaError> {
        let Some(player) = self.active_player().await? else {
            return Ok(None);
        };

        let metadata = TrackMetadata::from(&player.proxy.metadata().await?);
        let Some(url) = metadata.artwork_url else {
            return Ok(None);
        };

        artwork::load(&url, self.artwork_timeout).await.map(Some)
    }
}
