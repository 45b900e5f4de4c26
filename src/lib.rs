//! media-bridge - WebSocket bridge to the desktop's media session and audio outputs.
//!
//! Remote clients connect over WebSocket and send one-line text commands
//! (`get_media`, `toggle_playback`, `set_audio_device 2`, ...). Each command
//! gets exactly one reply, JSON for everything except `get_thumbnail`, which
//! answers with raw base64 artwork.
//!
//! The main pieces:
//!
//! - [`bridge`] parses commands, runs handlers and serves sessions
//! - [`services`] talks to MPRIS players and the `pactl` helper
//! - [`config`] loads the TOML configuration
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use media_bridge::{bridge, config::Config};
//!
//! # async fn run() -> media_bridge::Result<()> {
//! let config = Config::default();
//! let router = bridge::build_router(&config);
//! let address = "127.0.0.1:8765".parse().expect("valid address");
//!
//! let server = bridge::BridgeServer::bind(address, router).await?;
//! server.serve(async { let _ = tokio::signal::ctrl_c().await; }).await
//! # }
//! ```

/// Command dispatch, sessions and the WebSocket listener.
pub mod bridge;

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Media and audio providers.
pub mod services;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{BridgeError, Result};
