//! PASS command handler.

use super::super::core::first_param;
use super::super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use tracing::debug;

/// Handler for PASS command.
pub struct PassHandler;

impl Handler for PassHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        // PASS <password>
        if ctx.is_logged_in() {
            return Err(HandlerError::AlreadyRegistered);
        }

        let password = first_param(tail);
        if !ctx.matrix.password_matches(password) {
            debug!(client = %ctx.id(), "Rejected connection password");
            return Err(HandlerError::PasswordMismatch);
        }

        if let Some(session) = ctx.session_mut() {
            session.password_provided = true;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::core::testing::TestEngine;

    #[test]
    fn test_wrong_password_disconnects() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "PASS nope");

        assert_eq!(
            t.take(id),
            vec![
                ":irc.test 464 * :Password incorrect",
                ":irc.test 451 * :You have not registered",
                "ERROR :Closing link: (Access denied)",
            ]
        );
        assert!(t.was_disconnected(id));
    }

    #[test]
    fn test_correct_password_is_silent() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "PASS abc");
        assert!(t.take(id).is_empty());
        assert!(t.engine.matrix().session(id).unwrap().password_provided);
    }

    #[test]
    fn test_pass_after_login() {
        let mut t = TestEngine::new();
        let id = t.register("alice");
        t.line(id, "PASS abc");
        assert_eq!(t.take(id), vec![":irc.test 462 alice :You may not reregister"]);
        assert!(!t.was_disconnected(id));
    }
}
