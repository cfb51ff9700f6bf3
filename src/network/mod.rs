//! Network module.
//!
//! Contains the readiness multiplexer ([`Server`]), its connection table and
//! the traits through which it talks to the protocol engine.

mod connection;
mod event;
mod hub;
mod server;

pub use event::{Client, ClientId, EventHandler, Transport};
pub use server::Server;
