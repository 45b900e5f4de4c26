/// Media error types
pub mod error;
/// Provider trait definitions
pub mod service;
/// Session snapshot and control types
pub mod types;

pub use error::*;
pub use service::*;
pub use types::*;
