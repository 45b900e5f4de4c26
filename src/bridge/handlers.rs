use std::sync::Arc;

use base64::{Engine as _, engine::general_purpose};
use tracing::{debug, warn};

use super::response::{ActionResult, PlaybackState};
use crate::services::{
    AudioDevice, AudioError, DeviceCache, MediaError, MediaProvider, PlaybackAction,
    ThumbnailProvider,
};

const NO_ACTIVE_SESSION: &str = "No active media session found";
const INVALID_DEVICE_INDEX: &str = "Invalid device index";

/// Success and failure messages for one control verb.
struct ActionMessages {
    done: &'static str,
    refused: &'static str,
}

const PAUSE: ActionMessages = ActionMessages {
    done: "Media paused successfully",
    refused: "Failed to pause media",
};

const RESUME: ActionMessages = ActionMessages {
    done: "Media resumed successfully",
    refused: "Failed to resume media",
};

const NEXT: ActionMessages = ActionMessages {
    done: "Skipped to next track successfully",
    refused: "Failed to skip to next track",
};

const PREVIOUS: ActionMessages = ActionMessages {
    done: "Skipped to previous track successfully",
    refused: "Failed to skip to previous track",
};

/// One handler per verb.
///
/// Handlers never fail: every collaborator error is translated into the
/// failure shape of the verb's reply here, so sessions only ever see
/// complete payloads.
pub struct Handlers {
    media: Arc<dyn MediaProvider>,
    thumbnails: Arc<dyn ThumbnailProvider>,
    devices: Arc<DeviceCache>,
}

impl Handlers {
    /// Wire handlers to their collaborators
    pub fn new(
        media: Arc<dyn MediaProvider>,
        thumbnails: Arc<dyn ThumbnailProvider>,
        devices: Arc<DeviceCache>,
    ) -> Self {
        Self {
            media,
            thumbnails,
            devices,
        }
    }

    /// `get_media`
    pub async fn get_media(&self) -> PlaybackState {
        match self.media.current_session().await {
            Ok(session) => PlaybackState::from_session(session.as_ref()),
            Err(e) => {
                warn!(error = %e, "media session query failed");
                PlaybackState::fault(e.to_string())
            }
        }
    }

    /// `get_thumbnail`: base64 artwork, or an empty string when there is none.
    pub async fn get_thumbnail(&self) -> String {
        match self.thumbnails.thumbnail().await {
            Ok(Some(bytes)) => general_purpose::STANDARD.encode(bytes),
            Ok(None) => String::new(),
            Err(e) => {
                warn!(error = %e, "thumbnail unavailable");
                String::new()
            }
        }
    }

    /// `get_audio_devices`
    pub async fn get_audio_devices(&self) -> Vec<AudioDevice> {
        self.devices.devices().await
    }

    /// `set_audio_device <index>`
    pub async fn set_audio_device(&self, index: u32) -> ActionResult {
        match self.devices.set_default(index).await {
            Ok(()) => ActionResult::ok(format!("Default audio device set to {index}")),
            Err(e @ AudioError::DeviceNotFound(_)) => ActionResult::failure(e.to_string()),
            Err(e) => {
                warn!(index, error = %e, "setting default device failed");
                ActionResult::failure(format!("Failed to set audio device: {e}"))
            }
        }
    }

    /// Reply for a `set_audio_device` line whose argument did not parse.
    pub fn invalid_device_index(&self) -> ActionResult {
        ActionResult::failure(INVALID_DEVICE_INDEX)
    }

    /// `toggle_playback`: pause when playing, resume otherwise.
    pub async fn toggle_playback(&self) -> ActionResult {
        let session = match self.media.current_session().await {
            Ok(Some(session)) => session,
            Ok(None) => return ActionResult::failure(NO_ACTIVE_SESSION),
            Err(e) => return fault(e),
        };

        if session.is_playing() {
            self.perform(PlaybackAction::Pause, &PAUSE).await
        } else {
            self.perform(PlaybackAction::Play, &RESUME).await
        }
    }

    /// `next`
    pub async fn next(&self) -> ActionResult {
        self.perform(PlaybackAction::Next, &NEXT).await
    }

    /// `prev`
    pub async fn previous(&self) -> ActionResult {
        self.perform(PlaybackAction::Previous, &PREVIOUS).await
    }

    async fn perform(&self, action: PlaybackAction, messages: &ActionMessages) -> ActionResult {
        match self.media.perform(action).await {
            Ok(true) => ActionResult::ok(messages.done),
            Ok(false) => {
                debug!(%action, "player refused action");
                ActionResult::failure(messages.refused)
            }
            Err(MediaError::NoActiveSession) => ActionResult::failure(NO_ACTIVE_SESSION),
            Err(e) => fault(e),
        }
    }
}

fn fault(error: MediaError) -> ActionResult {
    warn!(%error, "media control failed");
    ActionResult::failure(format!("Error: {error}"))
}
