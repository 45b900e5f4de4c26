use std::{sync::Arc, time::Duration};

use tokio::{sync::Mutex, time::Instant};
use tracing::{debug, info, instrument, warn};

use super::{AudioDevice, AudioDeviceProvider, AudioError, mark_default};

struct Snapshot {
    devices: Vec<AudioDevice>,
    captured_at: Instant,
}

/// Time-bounded memoization of output device enumeration.
///
/// The snapshot lock is only held to read or update the in-memory list,
/// never while the helper runs, so a fresh read is never delayed by another
/// client's slow enumeration or device switch. Refreshes are serialized by a
/// separate lock: callers that find the cache expired while a refresh is in
/// flight wait for it and reuse its result instead of spawning another
/// helper.
///
/// A failed refresh returns an empty list and keeps the previous snapshot
/// untouched. That snapshot is already expired, so it is never served again;
/// it only remains as the reference list for index validation.
pub struct DeviceCache {
    provider: Arc<dyn AudioDeviceProvider>,
    ttl: Duration,
    helper_timeout: Duration,
    state: Mutex<Option<Snapshot>>,
    refresh: Mutex<()>,
}

impl DeviceCache {
    /// Create an empty cache in front of `provider`
    pub fn new(provider: Arc<dyn AudioDeviceProvider>, ttl: Duration, helper_timeout: Duration) -> Self {
        Self {
            provider,
            ttl,
            helper_timeout,
            state: Mutex::new(None),
            refresh: Mutex::new(()),
        }
    }

    async fn fresh_devices(&self) -> Option<Vec<AudioDevice>> {
        let state = self.state.lock().await;
        state
            .as_ref()
            .filter(|s| s.captured_at.elapsed() < self.ttl)
            .map(|s| s.devices.clone())
    }

    /// Current output devices, from memory while younger than the TTL.
    #[instrument(skip(self))]
    pub async fn devices(&self) -> Vec<AudioDevice> {
        if let Some(devices) = self.fresh_devices().await {
            debug!(count = devices.len(), "serving cached devices");
            return devices;
        }

        let _refresh = self.refresh.lock().await;

        if let Some(devices) = self.fresh_devices().await {
            debug!(count = devices.len(), "serving devices refreshed by another caller");
            return devices;
        }

        match self.provider.output_devices(self.helper_timeout).await {
            Ok(devices) => {
                info!(count = devices.len(), "refreshed output devices");
                *self.state.lock().await = Some(Snapshot {
                    devices: devices.clone(),
                    captured_at: Instant::now(),
                });
                devices
            }
            Err(e) => {
                warn!(error = %e, "device enumeration failed");
                Vec::new()
            }
        }
    }

    /// Make `index` the default output and update cached flags in place.
    ///
    /// # Errors
    ///
    /// Returns `AudioError::DeviceNotFound` without calling the provider when
    /// a device list is known and lacks `index`; otherwise whatever the
    /// provider reports. The cache is left untouched on error.
    #[instrument(skip(self))]
    pub async fn set_default(&self, index: u32) -> Result<(), AudioError> {
        {
            let state = self.state.lock().await;
            if let Some(snapshot) = state.as_ref() {
                if !snapshot.devices.iter().any(|d| d.index == index) {
                    return Err(AudioError::DeviceNotFound(index));
                }
            }
        }

        self.provider
            .set_default_output(index, self.helper_timeout)
            .await?;

        if let Some(snapshot) = self.state.lock().await.as_mut() {
            mark_default(&mut snapshot.devices, index);
        }

        info!(index, "default output device changed");
        Ok(())
    }
}
