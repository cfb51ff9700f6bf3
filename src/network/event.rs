//! Seams between the multiplexer and the protocol engine.
//!
//! The multiplexer raises connect/message/disconnect events through
//! [`EventHandler`] and hands the handler a [`Transport`] to answer with.
//! Handlers never touch sockets directly.

use std::fmt;
use std::net::SocketAddr;

use mio::Token;

/// Handle of one accepted connection.
///
/// Handles are allocated from a counter and never reused while the process
/// runs, so a handle kept after its connection is gone resolves to nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClientId(usize);

impl ClientId {
    /// Token reserved for the listening socket.
    pub(crate) const LISTENER: Token = Token(0);

    pub const fn new(raw: usize) -> Self {
        Self(raw)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub(crate) fn token(self) -> Token {
        Token(self.0)
    }

    pub(crate) fn from_token(token: Token) -> Self {
        Self(token.0)
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// Identity of a connection as seen by event handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Client {
    pub id: ClientId,
    pub addr: SocketAddr,
}

/// Outbound side of the multiplexer.
///
/// Every method is non-blocking. Unknown or already closed handles are
/// ignored.
pub trait Transport {
    /// Queue `data` for one connection.
    fn send_to(&mut self, client: ClientId, data: &str);

    /// Queue `data` for every open connection.
    fn broadcast(&mut self, data: &str);

    /// Queue `data` for each listed connection.
    fn multisend(&mut self, clients: &[ClientId], data: &str) {
        for client in clients {
            self.send_to(*client, data);
        }
    }

    /// Close a connection once its queued output has been flushed.
    fn disconnect_client(&mut self, client: ClientId);

    fn connected_clients_count(&self) -> usize;
}

/// Receiver of multiplexer events.
pub trait EventHandler {
    /// A connection was accepted.
    fn on_connect(&mut self, out: &mut dyn Transport, client: &Client);

    /// A connection is gone. Its handle no longer accepts output.
    fn on_disconnect(&mut self, out: &mut dyn Transport, client: &Client);

    /// One complete inbound line, terminator removed.
    fn on_message(&mut self, out: &mut dyn Transport, client: &Client, line: &str);
}
