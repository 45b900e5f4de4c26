use std::{
    fmt, io,
    net::SocketAddr,
    path::{Path, PathBuf},
    result,
};

use thiserror::Error;

/// Error types for the bridge process.
///
/// Everything here happens before the server starts accepting connections:
/// loading configuration, resolving the bind address, binding the socket.
/// Once the listener runs, faults are turned into response envelopes instead.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Configuration validation error
    #[error("configuration validation failed for '{component}': {details}")]
    ConfigValidation {
        /// Component that failed validation
        component: String,
        /// Validation error details
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error with location context
    #[error("failed to parse TOML at '{location}': {details}")]
    TomlParseError {
        /// Location of TOML being parsed (file path or "string")
        location: String,
        /// Parse error details
        details: String,
    },

    /// The configured host could not be turned into a socket address
    #[error("invalid bind address '{address}': {details}")]
    InvalidBindAddress {
        /// Host and port as configured
        address: String,
        /// Resolution error details
        details: String,
    },

    /// Binding the listening socket failed
    #[error("failed to bind {address}: {source}")]
    Bind {
        /// Address the server tried to bind
        address: SocketAddr,
        /// Underlying socket error
        source: io::Error,
    },
}

/// A specialized `Result` type for bridge operations.
pub type Result<T> = result::Result<T, BridgeError>;

impl BridgeError {
    /// Creates a TOML parsing error with optional file path context.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying parsing error
    /// * `path` - Optional path to the file that failed to parse
    pub fn toml_parse(error: impl fmt::Display, path: Option<&Path>) -> Self {
        let location = match path {
            Some(p) => {
                let clean_path = p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
                clean_path.to_string_lossy().to_string()
            }
            None => "string".to_string(),
        };

        BridgeError::TomlParseError {
            location,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error carrying the path it happened on.
    pub fn io_at(error: impl fmt::Display, path: &Path) -> Self {
        BridgeError::IoError {
            path: path.to_path_buf(),
            details: error.to_string(),
        }
    }
}
