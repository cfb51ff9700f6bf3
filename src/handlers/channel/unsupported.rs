//! MODE, INVITE and KICK are recognized but do nothing.

use super::super::{Context, Handler};
use crate::error::HandlerResult;
use tracing::debug;

/// Accepts a recognized command without acting on it.
pub struct UnsupportedHandler;

impl Handler for UnsupportedHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        debug!(client = %ctx.id(), args = tail, "Ignoring unimplemented command");
        Ok(())
    }

    fn requires_registration(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::core::testing::TestEngine;

    #[test]
    fn test_mode_invite_kick_are_silent() {
        let mut t = TestEngine::new();
        let alice = t.register("alice");
        let bob = t.register("bob");
        t.line(alice, "JOIN #test");
        t.line(bob, "JOIN #test");
        t.take_all();

        t.line(alice, "MODE #test +o bob");
        t.line(alice, "INVITE carol #test");
        t.line(alice, "KICK #test bob");
        assert!(t.take(alice).is_empty());
        assert!(t.take(bob).is_empty());
        assert!(t.engine.matrix().channels["#test"].is_member("bob"));
    }

    #[test]
    fn test_gated_before_registration() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "MODE #test");
        assert_eq!(t.take(id), vec![":irc.test 451 * :You have not registered"]);
    }
}
