//! Handler context and the `Handler` trait.

use plexirc_proto::{Message, Prefix, split_arg, trailing};

use crate::error::HandlerResult;
use crate::network::{Client, ClientId, Transport};
use crate::state::{Matrix, Session, UNSET_NICK};

/// Everything a command handler may touch while processing one line.
pub struct Context<'a> {
    /// Connection the line came from.
    pub client: &'a Client,
    pub matrix: &'a mut Matrix,
    /// Outbound side of the multiplexer.
    pub out: &'a mut dyn Transport,
}

impl<'a> Context<'a> {
    pub fn new(client: &'a Client, matrix: &'a mut Matrix, out: &'a mut dyn Transport) -> Self {
        Self {
            client,
            matrix,
            out,
        }
    }

    pub fn id(&self) -> ClientId {
        self.client.id
    }

    pub fn session(&self) -> Option<&Session> {
        self.matrix.session(self.client.id)
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.matrix.session_mut(self.client.id)
    }

    /// Current nickname, or `*` before one is set.
    pub fn nick(&self) -> String {
        self.session()
            .map_or(UNSET_NICK, Session::nick_or_star)
            .to_string()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session().is_some_and(|s| s.logged_in)
    }

    /// The sender's `nick!user@host` prefix.
    pub fn user_prefix(&self) -> Prefix {
        self.session().map_or_else(
            || Prefix::new_user(UNSET_NICK, UNSET_NICK, UNSET_NICK),
            Session::prefix,
        )
    }

    pub fn server_prefix(&self) -> Prefix {
        Prefix::ServerName(self.matrix.server_info.name.clone())
    }

    /// Send a message to this connection as is.
    pub fn send(&mut self, msg: &Message) {
        self.out.send_to(self.client.id, &msg.to_string());
    }

    /// Send a message to this connection with the server prefix attached.
    pub fn reply(&mut self, msg: Message) {
        let msg = msg.with_prefix(self.server_prefix());
        self.send(&msg);
    }

    /// Send a message to several connections.
    pub fn send_to_many(&mut self, clients: &[ClientId], msg: &Message) {
        self.out.multisend(clients, &msg.to_string());
    }

    /// Send a message to every connection on the server.
    pub fn broadcast(&mut self, msg: &Message) {
        self.out.broadcast(&msg.to_string());
    }

    /// Ask the multiplexer to close this connection after flushing.
    pub fn disconnect(&mut self) {
        self.out.disconnect_client(self.client.id);
    }
}

/// First parameter of a command tail.
///
/// A leading `:` makes the whole tail one parameter.
pub fn first_param(tail: &str) -> &str {
    if tail.starts_with(':') {
        trailing(tail)
    } else {
        split_arg(tail).0
    }
}

/// Trait implemented by all command handlers.
pub trait Handler {
    /// Process the command with its unparsed tail.
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult;

    /// Whether the session must be logged in first.
    fn requires_registration(&self) -> bool {
        false
    }
}
