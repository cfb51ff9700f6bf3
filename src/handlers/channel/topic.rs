//! TOPIC command handler.
//!
//! Any member may change the topic; there is no operator check.

use super::super::{Context, Handler};
use super::send_topic;
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::{Command, Message, split_arg, trailing};
use tracing::info;

/// Handler for TOPIC command.
pub struct TopicHandler;

impl Handler for TopicHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // TOPIC <channel> [:new topic]
        let (name, rest) = split_arg(tail);
        if name.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        let nick = ctx.nick();
        let prefix = ctx.user_prefix();
        let Some(channel) = ctx.matrix.channels.get_mut(name) else {
            return Err(HandlerError::NoSuchChannel(name.to_string()));
        };
        if !channel.is_member(&nick) {
            return Err(HandlerError::NotOnChannel(name.to_string()));
        }

        if rest.is_empty() {
            send_topic(ctx, name);
            return Ok(());
        }

        let topic = trailing(rest).to_string();
        channel.topic = topic.clone();
        info!(channel = name, nick = %nick, topic = %topic, "Topic changed");

        let Some(channel) = ctx.matrix.channels.get(name) else {
            return Ok(());
        };
        let recipients = ctx.matrix.channel_recipients(channel, None);
        let notice = Message::from(Command::TOPIC(name.to_string(), topic)).with_prefix(prefix);
        ctx.send_to_many(&recipients, &notice);
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}
