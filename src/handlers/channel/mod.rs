//! Channel-related command handlers.

mod join;
mod part;
mod topic;
mod unsupported;

pub use join::JoinHandler;
pub use part::PartHandler;
pub use topic::TopicHandler;
pub use unsupported::UnsupportedHandler;

use super::Context;
use plexirc_proto::Response;

/// Send the channel's topic reply: 332 when set, 331 otherwise.
fn send_topic(ctx: &mut Context<'_>, channel: &str) {
    let nick = ctx.nick();
    let topic = ctx
        .matrix
        .channels
        .get(channel)
        .map(|c| c.topic.clone())
        .unwrap_or_default();

    let reply = if topic.is_empty() {
        Response::rpl_notopic(&nick, channel)
    } else {
        Response::rpl_topic(&nick, channel, &topic)
    };
    ctx.reply(reply);
}
