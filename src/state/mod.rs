//! State management module.
//!
//! Contains the Matrix (server-wide state owned by the protocol engine) and
//! the per-connection and per-channel records it indexes.

mod channel;
mod matrix;
mod session;

pub use channel::Channel;
pub use matrix::{Matrix, ServerInfo};
pub use session::{Session, UNSET_NICK};
