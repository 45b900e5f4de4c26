use std::time::Duration;

use async_trait::async_trait;

use super::{AudioDevice, AudioError};

/// Access to the system's audio output devices.
///
/// Implementations may shell out to slow external programs, so every call
/// carries the longest time the caller is willing to wait. Exceeding it must
/// surface as [`AudioError::Timeout`] and must not leave work running behind.
#[async_trait]
pub trait AudioDeviceProvider: Send + Sync + 'static {
    /// Enumerate output devices, in backend order.
    async fn output_devices(&self, timeout: Duration) -> Result<Vec<AudioDevice>, AudioError>;

    /// Make the device with `index` the default output.
    async fn set_default_output(&self, index: u32, timeout: Duration) -> Result<(), AudioError>;
}
