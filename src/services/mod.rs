/// Audio output devices and their cache
pub mod audio;
/// Media session types and provider traits
pub mod media;
/// MPRIS implementation of the media providers
pub mod mpris;

pub use audio::{AudioDevice, AudioDeviceProvider, AudioError, DeviceCache, PactlProvider};
pub use media::{MediaError, MediaProvider, MediaSession, PlaybackAction, ThumbnailProvider};
pub use mpris::MprisProvider;
