//! Per-connection registration state.
//!
//! A [`Session`] is created when a connection is accepted and destroyed when
//! it goes away. It carries the registration flags that decide when the
//! client is admitted ("logged in") and the identity used in its signature.

use std::net::SocketAddr;

use plexirc_proto::Prefix;

use crate::network::ClientId;

/// Placeholder used in replies before a nickname is set.
pub const UNSET_NICK: &str = "*";

/// Registration and identity state of one connection.
#[derive(Debug, Clone)]
pub struct Session {
    /// Connection handle this session belongs to.
    pub client: ClientId,
    /// Peer address reported by the multiplexer.
    pub addr: SocketAddr,
    pub nick: Option<String>,
    pub username: Option<String>,
    pub hostname: Option<String>,
    /// A PASS matching the server password was received.
    pub password_provided: bool,
    /// A CAP command was seen at least once.
    pub cap_started: bool,
    /// CAP END was received.
    pub cap_ended: bool,
    /// Set exactly once, when the welcome burst goes out.
    pub logged_in: bool,
    /// Reason given with QUIT, used in the disconnect notice.
    pub farewell: Option<String>,
}

impl Session {
    pub fn new(client: ClientId, addr: SocketAddr) -> Self {
        Self {
            client,
            addr,
            nick: None,
            username: None,
            hostname: None,
            password_provided: false,
            cap_started: false,
            cap_ended: false,
            logged_in: false,
            farewell: None,
        }
    }

    /// Nickname for use as a reply target.
    pub fn nick_or_star(&self) -> &str {
        self.nick.as_deref().unwrap_or(UNSET_NICK)
    }

    /// Whether every registration predicate holds.
    ///
    /// Capability negotiation only gates login if it was ever started.
    pub fn can_log_in(&self) -> bool {
        self.nick.is_some()
            && self.username.is_some()
            && self.password_provided
            && (!self.cap_started || self.cap_ended)
    }

    /// Message prefix built from the current `nick!user@host`.
    pub fn prefix(&self) -> Prefix {
        Prefix::new_user(
            self.nick_or_star(),
            self.username.as_deref().unwrap_or(UNSET_NICK),
            self.hostname.as_deref().unwrap_or(UNSET_NICK),
        )
    }

    /// Full signature `nick!user@host`.
    pub fn signature(&self) -> String {
        self.prefix().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(ClientId::new(1), "127.0.0.1:5000".parse().unwrap())
    }

    #[test]
    fn test_login_requires_all_predicates() {
        let mut s = session();
        assert!(!s.can_log_in());

        s.nick = Some("alice".into());
        s.username = Some("al".into());
        assert!(!s.can_log_in());

        s.password_provided = true;
        assert!(s.can_log_in());
    }

    #[test]
    fn test_started_cap_blocks_login_until_end() {
        let mut s = session();
        s.nick = Some("alice".into());
        s.username = Some("al".into());
        s.password_provided = true;
        s.cap_started = true;
        assert!(!s.can_log_in());

        s.cap_ended = true;
        assert!(s.can_log_in());
    }

    #[test]
    fn test_signature() {
        let mut s = session();
        assert_eq!(s.nick_or_star(), "*");

        s.nick = Some("alice".into());
        s.username = Some("al".into());
        s.hostname = Some("host".into());
        assert_eq!(s.signature(), "alice!al@host");
    }
}
