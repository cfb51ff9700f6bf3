//! PING handler.

use super::super::core::first_param;
use super::super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::Message;

/// Handler for PING command.
pub struct PingHandler;

impl Handler for PingHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // PING <token>
        let token = first_param(tail);
        if token.is_empty() {
            return Err(HandlerError::NoOrigin);
        }

        let server = ctx.matrix.server_info.name.clone();
        ctx.reply(Message::pong(server, token));
        Ok(())
    }
}
