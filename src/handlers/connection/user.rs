//! USER command handler.

use super::super::{Context, Handler};
use super::welcome::try_login;
use crate::error::{HandlerError, HandlerResult};
use plexirc_proto::split_arg;

/// Handler for USER command.
///
/// `USER <username> <hostname>`; anything after the hostname is ignored.
/// This is also where a connection that never sent PASS is turned away.
pub struct UserHandler;

impl Handler for UserHandler {
    fn handle(&self, ctx: &mut Context<'_>, tail: &str) -> HandlerResult {
        if ctx.is_logged_in() {
            return Err(HandlerError::AlreadyRegistered);
        }

        let (username, rest) = split_arg(tail);
        let (hostname, _) = split_arg(rest);
        if username.is_empty() || hostname.is_empty() {
            return Err(HandlerError::IncompleteUser);
        }

        let Some(session) = ctx.session_mut() else {
            return Ok(());
        };
        session.username = Some(username.to_string());
        session.hostname = Some(hostname.to_string());

        try_login(ctx);

        if !ctx.session().is_some_and(|s| s.password_provided) {
            return Err(HandlerError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::core::testing::TestEngine;

    #[test]
    fn test_missing_hostname() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "USER alice");
        assert_eq!(
            t.take(id),
            vec![
                ":irc.test 461 * USER :Not enough parameters",
                ":irc.test 451 * :You have not registered",
            ]
        );
        assert!(!t.was_disconnected(id));
    }

    #[test]
    fn test_user_without_pass_is_rejected() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "NICK alice");
        t.line(id, "USER alice host");
        assert_eq!(
            t.take(id),
            vec![
                ":irc.test 464 alice :Password incorrect",
                ":irc.test 451 alice :You have not registered",
                "ERROR :Closing link: (Access denied)",
            ]
        );
        assert!(t.was_disconnected(id));
    }

    #[test]
    fn test_user_after_login() {
        let mut t = TestEngine::new();
        let id = t.register("alice");
        t.line(id, "USER again host");
        assert_eq!(t.take(id), vec![":irc.test 462 alice :You may not reregister"]);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let mut t = TestEngine::new();
        let id = t.connect();
        t.line(id, "PASS abc");
        t.line(id, "USER al example.org 0 :Alice Liddell");
        let session = t.engine.matrix().session(id).unwrap();
        assert_eq!(session.username.as_deref(), Some("al"));
        assert_eq!(session.hostname.as_deref(), Some("example.org"));
        assert!(!session.logged_in);
    }
}
