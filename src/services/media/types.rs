use std::{fmt, time::Duration};

/// Playback status of a media session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Session is currently playing
    Playing,

    /// Session is paused
    Paused,

    /// Session is stopped
    Stopped,
}

impl From<&str> for PlaybackStatus {
    fn from(status: &str) -> Self {
        match status {
            "Playing" => Self::Playing,
            "Paused" => Self::Paused,
            _ => Self::Stopped,
        }
    }
}

/// Snapshot of the session the OS considers current.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSession {
    /// Playback status at the time of the query
    pub status: PlaybackStatus,
    /// Track title
    pub title: String,
    /// Track artist(s), comma separated
    pub artist: String,
    /// Identifier of the application owning the session
    pub app_id: String,
    /// Current playback position
    pub position: Duration,
    /// Track length, zero when unknown
    pub duration: Duration,
}

impl MediaSession {
    /// Whether the session is actively playing
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }
}

/// Control verbs a session accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackAction {
    /// Resume or start playback
    Play,
    /// Pause playback
    Pause,
    /// Skip to the next track
    Next,
    /// Skip to the previous track
    Previous,
}

impl fmt::Display for PlaybackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackAction::Play => "Play",
            PlaybackAction::Pause => "Pause",
            PlaybackAction::Next => "Next",
            PlaybackAction::Previous => "Previous",
        };
        f.write_str(name)
    }
}
