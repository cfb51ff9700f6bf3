//! PRIVMSG command handler.
//!
//! Targets starting with `#` or `&` are channels; anything else is a
//! nickname.

use super::super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::{ChannelExt, Message, split_arg, trailing};

/// Handler for PRIVMSG command.
pub struct PrivmsgHandler;

impl Handler for PrivmsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // PRIVMSG <target> :<text>
        let (target, rest) = split_arg(tail);
        if target.is_empty() {
            return Err(HandlerError::NoRecipient);
        }
        let text = trailing(rest);
        if text.is_empty() {
            return Err(HandlerError::NoTextToSend);
        }

        let msg = Message::privmsg(target, text).with_prefix(ctx.user_prefix());

        if !target.is_channel_target() {
            let recipient = ctx
                .matrix
                .nick_owner(target)
                .ok_or_else(|| HandlerError::NoSuchNick(target.to_string()))?;
            ctx.out.send_to(recipient, &msg.to_string());
            return Ok(());
        }

        let nick = ctx.nick();
        let Some(channel) = ctx.matrix.channels.get(target) else {
            return Err(HandlerError::NoSuchChannel(target.to_string()));
        };
        if !channel.is_member(&nick) {
            return Err(HandlerError::NotOnChannel(target.to_string()));
        }

        let recipients = ctx.matrix.channel_recipients(channel, Some(ctx.id()));
        ctx.send_to_many(&recipients, &msg);
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
