/// Time-bounded device enumeration cache
pub mod cache;
/// Audio device records
pub mod device;
/// Audio error types
pub mod error;
/// External helper process execution
pub mod helper;
/// `pactl`-backed device provider
pub mod pactl;
/// Device provider trait
pub mod service;

pub use cache::DeviceCache;
pub use device::*;
pub use error::*;
pub use pactl::PactlProvider;
pub use service::*;
