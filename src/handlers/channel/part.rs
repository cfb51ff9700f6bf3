//! PART command handler.

use super::super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::{Command, Message, split_arg, trailing};
use tracing::debug;

/// Handler for PART command.
pub struct PartHandler;

impl Handler for PartHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // PART <channel> [:reason]
        let (name, rest) = split_arg(tail);
        if name.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }
        let reason = trailing(rest);

        let nick = ctx.nick();
        let Some(channel) = ctx.matrix.channels.get(name) else {
            return Err(HandlerError::NoSuchChannel(name.to_string()));
        };
        if !channel.is_member(&nick) {
            return Err(HandlerError::NotOnChannel(name.to_string()));
        }

        // The leaver sees its own PART.
        let recipients = ctx.matrix.channel_recipients(channel, None);
        let part = Message::from(Command::PART(
            name.to_string(),
            (!reason.is_empty()).then(|| reason.to_string()),
        ))
        .with_prefix(ctx.user_prefix());
        ctx.send_to_many(&recipients, &part);

        ctx.matrix.remove_from_channel(name, &nick);
        if !ctx.matrix.channels.contains_key(name) {
            debug!(channel = name, "Channel removed");
        }
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
