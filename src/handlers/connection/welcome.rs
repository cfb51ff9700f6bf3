//! Registration completion and the welcome burst.

use super::super::Context;
use plexirc_proto::Response;
use tracing::info;

/// Log the session in if every registration predicate now holds.
///
/// Sends 001-004 the first time it succeeds; later calls do nothing.
pub fn try_login(ctx: &mut Context<'_>) {
    let Some(session) = ctx.session_mut() else {
        return;
    };
    if session.logged_in || !session.can_log_in() {
        return;
    }
    session.logged_in = true;

    let nick = session.nick_or_star().to_string();
    let signature = session.signature();
    let addr = session.addr;

    let info = &ctx.matrix.server_info;
    let burst = [
        Response::rpl_welcome(&nick, &info.network, &signature),
        Response::rpl_yourhost(&nick, &info.name, &info.version),
        Response::rpl_created(
            &nick,
            &info.created.format("%a %b %d %Y at %H:%M:%S UTC").to_string(),
        ),
        Response::rpl_myinfo(&nick, &info.name, &info.version),
    ];

    info!(client = %ctx.id(), nick = %nick, addr = %addr, "Client registered");

    for reply in burst {
        ctx.reply(reply);
    }
}
