//! QUIT handler.
//!
//! Only records the farewell and asks for the connection to be closed. The
//! QUIT notice goes out from the disconnect path once the socket is gone.

use super::super::{Context, Handler};
use crate::error::HandlerResult;
use plexirc_proto::{Message, trailing};
use tracing::info;

/// Handler for QUIT command.
pub struct QuitHandler;

impl Handler for QuitHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        let reason = trailing(tail);
        let farewell = (!reason.is_empty()).then(|| reason.to_string());

        info!(
            client = %ctx.id(),
            nick = %ctx.nick(),
            message = ?farewell,
            "Client quit"
        );

        let shown = farewell.as_deref().unwrap_or("Client quit").to_string();
        if let Some(session) = ctx.session_mut() {
            session.farewell = farewell;
        }

        ctx.send(&Message::error(format!("Closing link: ({shown})")));
        ctx.disconnect();
        Ok(())
    }
}
