use serde::Serialize;
use tracing::error;

use crate::services::{AudioDevice, MediaSession};

/// Fallback payload if a reply cannot be serialized.
const SERIALIZATION_FAILED: &str = r#"{"error":"Failed to encode response"}"#;

/// Outcome of a control verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionResult {
    /// Whether the action was carried out
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}

impl ActionResult {
    /// A successful outcome
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// A failed outcome
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Track details, only present while something is playing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NowPlaying {
    /// Track title
    pub title: String,
    /// Track artist
    pub artist: String,
    /// Source application id
    #[serde(rename = "app")]
    pub app_id: String,
    /// Position in whole seconds
    #[serde(rename = "position")]
    pub position_seconds: u64,
    /// Duration in whole seconds
    #[serde(rename = "duration")]
    pub duration_seconds: u64,
    /// Position as `M:SS`
    pub position_formatted: String,
    /// Duration as `M:SS`
    pub duration_formatted: String,
    /// Position relative to duration, 0..=100, two decimals
    pub progress_percent: f64,
}

impl NowPlaying {
    /// Derive the wire fields from a session snapshot
    pub fn from_session(session: &MediaSession) -> Self {
        let position_seconds = session.position.as_secs();
        let duration_seconds = session.duration.as_secs();

        Self {
            title: session.title.clone(),
            artist: session.artist.clone(),
            app_id: session.app_id.clone(),
            position_seconds,
            duration_seconds,
            position_formatted: format_clock(position_seconds),
            duration_formatted: format_clock(duration_seconds),
            progress_percent: progress_percent(position_seconds, duration_seconds),
        }
    }
}

/// Reply to `get_media`.
///
/// Track fields appear iff `is_playing` is true; `error` only accompanies a
/// provider fault.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackState {
    /// Whether the current session is playing
    pub is_playing: bool,
    /// Track details while playing
    #[serde(flatten)]
    pub track: Option<NowPlaying>,
    /// Provider fault description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PlaybackState {
    /// Nothing is playing (no session, or paused/stopped)
    pub fn idle() -> Self {
        Self {
            is_playing: false,
            track: None,
            error: None,
        }
    }

    /// The provider failed while querying
    pub fn fault(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::idle()
        }
    }

    /// State for an optional session snapshot
    pub fn from_session(session: Option<&MediaSession>) -> Self {
        match session.filter(|s| s.is_playing()) {
            Some(session) => Self {
                is_playing: true,
                track: Some(NowPlaying::from_session(session)),
                error: None,
            },
            None => Self::idle(),
        }
    }
}

/// Reply to an unrecognized request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReply {
    /// Error description
    pub error: String,
}

/// Everything a handler can answer with.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// JSON playback state
    Media(PlaybackState),
    /// Raw base64 text, empty when there is no artwork
    Thumbnail(String),
    /// JSON device array
    Devices(Vec<AudioDevice>),
    /// JSON action outcome
    Action(ActionResult),
    /// JSON error object
    Error(ErrorReply),
}

impl Reply {
    /// The `{"error":"Unknown command"}` reply
    pub fn unknown_command() -> Self {
        Reply::Error(ErrorReply {
            error: "Unknown command".to_string(),
        })
    }

    /// Encode the reply as one wire message.
    pub fn into_wire(self) -> String {
        let encoded = match self {
            Reply::Thumbnail(base64) => return base64,
            Reply::Media(state) => serde_json::to_string(&state),
            Reply::Devices(devices) => serde_json::to_string(&devices),
            Reply::Action(result) => serde_json::to_string(&result),
            Reply::Error(reply) => serde_json::to_string(&reply),
        };

        encoded.unwrap_or_else(|e| {
            error!(error = %e, "failed to encode reply");
            SERIALIZATION_FAILED.to_string()
        })
    }
}

/// Seconds as `M:SS`; minutes are not wrapped into hours.
pub fn format_clock(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Percentage of `position` in `duration`, rounded to two decimals and
/// clamped to 0..=100. Zero when the duration is unknown.
pub fn progress_percent(position: u64, duration: u64) -> f64 {
    if duration == 0 {
        return 0.0;
    }

    let percent = position as f64 / duration as f64 * 100.0;
    ((percent * 100.0).round() / 100.0).clamp(0.0, 100.0)
}
