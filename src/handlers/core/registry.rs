//! Command handler registry and dispatch.
//!
//! The `Registry` maps each recognized command to its handler, enforces the
//! registration gate and turns handler errors into replies. Nothing raised
//! by a handler gets past [`Registry::dispatch`].

use std::collections::HashMap;

use plexirc_proto::{CommandKind, RawLine};
use tracing::{debug, trace};

use super::context::{Context, Handler};
use crate::error::HandlerError;
use crate::handlers::channel::{JoinHandler, PartHandler, TopicHandler, UnsupportedHandler};
use crate::handlers::connection::{
    CapHandler, NickHandler, PassHandler, PingHandler, QuitHandler, UserHandler, try_login,
};
use crate::handlers::messaging::PrivmsgHandler;

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<CommandKind, Box<dyn Handler>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<CommandKind, Box<dyn Handler>> = HashMap::new();

        // Connection/registration
        handlers.insert(CommandKind::Pass, Box::new(PassHandler));
        handlers.insert(CommandKind::Cap, Box::new(CapHandler));
        handlers.insert(CommandKind::Nick, Box::new(NickHandler));
        handlers.insert(CommandKind::User, Box::new(UserHandler));
        handlers.insert(CommandKind::Ping, Box::new(PingHandler));
        handlers.insert(CommandKind::Quit, Box::new(QuitHandler));

        // Channel
        handlers.insert(CommandKind::Join, Box::new(JoinHandler));
        handlers.insert(CommandKind::Part, Box::new(PartHandler));
        handlers.insert(CommandKind::Topic, Box::new(TopicHandler));
        handlers.insert(CommandKind::Mode, Box::new(UnsupportedHandler));
        handlers.insert(CommandKind::Invite, Box::new(UnsupportedHandler));
        handlers.insert(CommandKind::Kick, Box::new(UnsupportedHandler));

        // Messaging
        handlers.insert(CommandKind::Privmsg, Box::new(PrivmsgHandler));

        Self { handlers }
    }

    /// Dispatch one inbound line.
    pub fn dispatch(&self, ctx: &mut Context<'_>, line: &str) {
        let Some(raw) = RawLine::parse(line) else {
            return;
        };
        let kind = raw.kind();

        let Some(handler) = self.handlers.get(&kind) else {
            debug!(client = %ctx.id(), command = raw.command, "Ignoring unknown command");
            return;
        };

        let result = if handler.requires_registration() && !ctx.is_logged_in() {
            Err(HandlerError::NotRegistered)
        } else {
            handler.handle(ctx, raw.tail)
        };

        match result {
            Ok(()) => {
                if kind.is_registration() {
                    try_login(ctx);
                }
            }
            Err(err) => {
                trace!(
                    client = %ctx.id(),
                    command = %kind,
                    error_code = err.error_code(),
                    "Command rejected"
                );
                let server_name = ctx.matrix.server_info.name.clone();
                let nick = ctx.nick();
                for reply in err.to_irc_replies(&server_name, &nick, kind.as_str()) {
                    ctx.send(&reply);
                }
                if err.disconnects() {
                    ctx.disconnect();
                }
            }
        }
    }
}
