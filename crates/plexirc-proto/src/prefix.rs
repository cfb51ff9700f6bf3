//! IRC message prefix types.
//!
//! A prefix identifies the origin of a message: either the server itself or
//! a user's `nick!user@host` signature.

use std::fmt;

/// IRC message prefix - identifies the origin of a message.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
pub enum Prefix {
    /// Server name (e.g., "irc.example.com")
    ServerName(String),
    /// User prefix: (nickname, username, hostname)
    Nickname(String, String, String),
}

impl Prefix {
    /// Create a new user prefix from nick, user, and host components.
    pub fn new_user(
        nick: impl Into<String>,
        user: impl Into<String>,
        host: impl Into<String>,
    ) -> Self {
        Prefix::Nickname(nick.into(), user.into(), host.into())
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::ServerName(name) => f.write_str(name),
            Prefix::Nickname(nick, user, host) => write!(f, "{nick}!{user}@{host}"),
        }
    }
}
