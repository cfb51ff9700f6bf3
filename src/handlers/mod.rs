//! Protocol engine: command handlers and the connection lifecycle.
//!
//! Handlers are organized by area:
//! - `connection`: registration handshake, PING, QUIT
//! - `channel`: JOIN, PART, TOPIC, and the recognized-but-inert MODE/INVITE/KICK
//! - `messaging`: PRIVMSG
//!
//! [`Engine`] ties them to the multiplexer's event contract.

mod channel;
mod connection;
mod core;
mod engine;
mod messaging;

pub use self::core::{Context, Handler, Registry};
pub use engine::Engine;
