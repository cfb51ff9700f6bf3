//! NICK command handler.

use super::super::core::first_param;
use super::super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::{Command, Message, NickExt};
use tracing::info;

/// Handler for NICK command.
pub struct NickHandler;

impl Handler for NickHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // NICK <nickname>
        let nick = first_param(tail);
        if nick.is_empty() {
            return Err(HandlerError::NoNicknameGiven);
        }
        if !nick.is_valid_nick() {
            return Err(HandlerError::ErroneousNickname(nick.to_string()));
        }

        let id = ctx.id();
        match ctx.matrix.nick_owner(nick) {
            Some(owner) if owner == id => return Ok(()),
            Some(_) => return Err(HandlerError::NicknameInUse(nick.to_string())),
            None => {}
        }

        // Signature must be taken before the change.
        let logged_in = ctx.is_logged_in();
        let old_prefix = ctx.user_prefix();

        let old = ctx.matrix.change_nick(id, nick);

        if logged_in {
            info!(client = %id, old = ?old, new = nick, "Nick changed");
            let notice = Message::from(Command::NICK(nick.to_string())).with_prefix(old_prefix);
            ctx.broadcast(&notice);
        }
        Ok(())
    }
}
