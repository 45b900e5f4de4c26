use std::time::Duration;

/// Errors that can occur while talking to the audio device backend
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    /// The helper program could not be started
    #[error("failed to start audio helper '{program}': {source}")]
    Spawn {
        /// Program that failed to start
        program: String,
        /// Underlying OS error
        source: std::io::Error,
    },

    /// The helper ran but reported failure
    #[error("audio helper exited with {status}: {stderr}")]
    HelperFailed {
        /// Exit status description
        status: String,
        /// Trimmed stderr output of the helper
        stderr: String,
    },

    /// The helper did not finish in time and was killed
    #[error("audio helper timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The helper's output could not be understood
    #[error("unexpected audio helper output: {0}")]
    Parse(String),

    /// No device with the given index is known
    #[error("Audio device {0} not found")]
    DeviceNotFound(u32),
}
