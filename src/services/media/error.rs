/// Errors that can occur during media session operations
#[derive(thiserror::Error, Debug)]
pub enum MediaError {
    /// No player currently owns a media session
    #[error("No active media session found")]
    NoActiveSession,

    /// D-Bus communication error
    #[error("D-Bus operation failed: {0}")]
    DbusError(#[from] zbus::Error),

    /// Failed to control the player
    #[error("Failed to control player: {0}")]
    ControlFailed(String),

    /// Artwork could not be loaded
    #[error("Failed to load artwork: {0}")]
    Artwork(String),

    /// Failed to initialize the media service
    #[error("Failed to initialize media service: {0}")]
    InitializationFailed(String),
}
