mod artwork;
/// Track metadata types
pub mod metadata;
/// D-Bus proxy trait definitions
pub mod proxy;
/// Session provider implementation
pub mod session;

pub use metadata::*;
pub use proxy::*;
pub use session::MprisProvider;
