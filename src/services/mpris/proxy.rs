#![allow(missing_docs)]

use std::collections::HashMap;
use zbus::{Result, proxy};

/// MPRIS MediaPlayer2.Player interface proxy
///
/// Only the members the bridge reads or invokes are declared.
#[proxy(
    interface = "org.mpris.MediaPlayer2.Player",
    default_service = "org.mpris.MediaPlayer2",
    default_path = "/org/mpris/MediaPlayer2"
)]
pub trait MediaPlayer2Player {
    /// Start playback
    fn play(&self) -> Result<()>;

    /// Pause playback
    fn pause(&self) -> Result<()>;

    /// Skip to next track
    fn next(&self) -> Result<()>;

    /// Skip to previous track
    fn previous(&self) -> Result<()>;

    /// Current playback status (Playing, Paused, Stopped)
    #[zbus(property)]
    fn playback_status(&self) -> Result<String>;

    /// Current track metadata
    #[zbus(property)]
    fn metadata(&self) -> Result<HashMap<String, zbus::zvariant::OwnedValue>>;

    /// Current playback position in microseconds
    #[zbus(property)]
    fn position(&self) -> Result<i64>;

    /// Whether the player can skip to next track
    #[zbus(property)]
    fn can_go_next(&self) -> Result<bool>;

    /// Whether the player can skip to previous track
    #[zbus(property)]
    fn can_go_previous(&self) -> Result<bool>;

    /// Whether the player can start playback
    #[zbus(property)]
    fn can_play(&self) -> Result<bool>;

    /// Whether the player can pause playback
    #[zbus(property)]
    fn can_pause(&self) -> Result<bool>;
}
