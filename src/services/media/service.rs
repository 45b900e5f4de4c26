use async_trait::async_trait;

use super::{MediaError, MediaSession, PlaybackAction};

/// Access to the OS media session.
#[async_trait]
pub trait MediaProvider: Send + Sync + 'static {
    /// The current session, or `None` when no player is active.
    async fn current_session(&self) -> Result<Option<MediaSession>, MediaError>;

    /// Sends a control verb to the current session.
    ///
    /// Returns `Ok(false)` when the player declines the action (for example
    /// it cannot skip), and `Err(MediaError::NoActiveSession)` when there is
    /// no session to control.
    async fn perform(&self, action: PlaybackAction) -> Result<bool, MediaError>;
}

/// Album artwork of the current session.
#[async_trait]
pub trait ThumbnailProvider: Send + Sync + 'static {
    /// Raw image bytes, or `None` when there is no session or no artwork.
    async fn thumbnail(&self) -> Result<Option<Vec<u8>>, MediaError>;
}
