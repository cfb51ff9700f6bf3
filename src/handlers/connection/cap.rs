//! CAP command handler.
//!
//! No capabilities are offered. Any subcommand other than END gets an empty
//! list; END closes negotiation so registration can complete.

use super::super::{Context, Handler};
use crate::error::HandlerResult;
use plexirc_proto::{Command, Message, split_arg};

/// Handler for CAP command.
pub struct CapHandler;

impl Handler for CapHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        let (subcommand, _) = split_arg(tail);
        let ended = subcommand.eq_ignore_ascii_case("END");

        if let Some(session) = ctx.session_mut() {
            session.cap_started = true;
            if ended {
                session.cap_ended = true;
            }
        }

        if !ended {
            let reply = Message::from(Command::CAP(
                "*".to_string(),
                "LS".to_string(),
                String::new(),
            ));
            ctx.reply(reply);
        }
        Ok(())
    }
}
