use serde::{Deserialize, Serialize};

/// An audio output device as reported to clients.
///
/// `index` is assigned by the audio backend and stays stable while the
/// device exists, so clients can echo it back in `set_audio_device`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioDevice {
    /// Backend-assigned device index
    pub index: u32,
    /// Human-readable device name
    pub name: String,
    /// Whether this is the current default output
    #[serde(rename = "default")]
    pub is_default: bool,
}

impl AudioDevice {
    /// Create a device record
    pub fn new(index: u32, name: impl Into<String>, is_default: bool) -> Self {
        Self {
            index,
            name: name.into(),
            is_default,
        }
    }
}

/// Marks exactly the device with `index` as default, clearing every other flag.
pub fn mark_default(devices: &mut [AudioDevice], index: u32) {
    for device in devices {
        device.is_default = device.index == index;
    }
}
