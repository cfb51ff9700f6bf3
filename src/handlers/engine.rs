//! Connection lifecycle on top of the command registry.

use plexirc_proto::{Command, Message};
use tracing::{debug, info, warn};

use super::{Context, Registry};
use crate::config::ServerConfig;
use crate::network::{Client, EventHandler, Transport};
use crate::state::{Matrix, ServerInfo};

/// Farewell used when a client leaves without a QUIT reason.
pub const DEFAULT_FAREWELL: &str = "Client disconnected";

/// The protocol engine.
///
/// Owns the Matrix and routes every multiplexer event into it.
pub struct Engine {
    matrix: Matrix,
    registry: Registry,
}

impl Engine {
    pub fn new(server_info: ServerInfo, password: impl Into<String>) -> Self {
        Self {
            matrix: Matrix::new(server_info, password),
            registry: Registry::new(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(
            ServerInfo::new(&config.name, &config.network),
            &config.password,
        )
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }
}

impl EventHandler for Engine {
    fn on_connect(&mut self, _out: &mut dyn Transport, client: &Client) {
        self.matrix.add_session(client.id, client.addr);
        debug!(client = %client.id, addr = %client.addr, "Session created");
    }

    fn on_disconnect(&mut self, out: &mut dyn Transport, client: &Client) {
        let Some(session) = self.matrix.remove_session(client.id) else {
            return;
        };
        if !session.logged_in {
            return;
        }

        let reason = session
            .farewell
            .clone()
            .unwrap_or_else(|| DEFAULT_FAREWELL.to_string());
        info!(client = %client.id, nick = session.nick_or_star(), reason = %reason, "Client quit");

        let quit = Message::from(Command::QUIT(reason)).with_prefix(session.prefix());
        out.broadcast(&quit.to_string());
    }

    fn on_message(&mut self, out: &mut dyn Transport, client: &Client, line: &str) {
        if self.matrix.session(client.id).is_none() {
            warn!(client = %client.id, "Message from unknown session");
            return;
        }
        let mut ctx = Context::new(client, &mut self.matrix, out);
        self.registry.dispatch(&mut ctx, line);
    }
}
