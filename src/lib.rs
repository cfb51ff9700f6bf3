//! plexircd - a single-threaded, non-blocking IRC-style chat server.
//!
//! - [`network`]: the readiness multiplexer and its event seams
//! - [`handlers`]: the protocol engine (registration, channels, messaging)
//! - [`state`]: sessions, channels and the nickname/channel registries
//! - [`config`]: TOML configuration and validation
//! - [`error`]: server and handler error types

pub mod config;
pub mod error;
pub mod handlers;
pub mod network;
pub mod state;

pub use handlers::Engine;
pub use network::Server;
