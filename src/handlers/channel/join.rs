//! JOIN command handler.

use super::super::core::first_param;
use super::super::{Context, Handler};
use super::send_topic;
use crate::error::{HandlerError, HandlerResult};
use crate::state::Channel;
use plexirc_proto::{ChannelExt, Command, Message, Response};
use tracing::info;

/// Handler for JOIN command.
///
/// The first joiner creates the channel and becomes its operator.
pub struct JoinHandler;

impl Handler for JoinHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // JOIN <channel>
        let name = first_param(tail);
        if name.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }
        if !name.is_channel_name() {
            return Err(HandlerError::NoSuchChannel(name.to_string()));
        }

        let nick = ctx.nick();
        match ctx.matrix.channels.get_mut(name) {
            Some(channel) => {
                if !channel.add_member(&nick) {
                    return Ok(());
                }
            }
            None => {
                info!(channel = name, creator = %nick, "Channel created");
                ctx.matrix
                    .channels
                    .insert(name.to_string(), Channel::new(name, &nick));
            }
        }

        let Some(channel) = ctx.matrix.channels.get(name) else {
            return Ok(());
        };
        let recipients = ctx.matrix.channel_recipients(channel, None);
        let names = channel.names_list();

        let join = Message::from(Command::JOIN(name.to_string())).with_prefix(ctx.user_prefix());
        ctx.send_to_many(&recipients, &join);

        send_topic(ctx, name);
        ctx.reply(Response::rpl_namreply(&nick, name, &names));
        ctx.reply(Response::rpl_endofnames(&nick, name));
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
