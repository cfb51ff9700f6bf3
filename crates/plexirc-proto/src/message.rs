//! Outbound protocol messages.

use std::fmt::{self, Display, Formatter};

use crate::command::Command;
use crate::prefix::Prefix;

/// An outbound IRC message: optional prefix plus command.
///
/// `Display` renders the full wire line, CRLF included.
///
/// ```
/// use plexirc_proto::{Message, Prefix};
///
/// let msg = Message::privmsg("#rust", "hi")
///     .with_prefix(Prefix::new_user("bob", "bob", "host"));
/// assert_eq!(msg.to_string(), ":bob!bob@host PRIVMSG #rust :hi\r\n");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Message {
    /// Message prefix/source (e.g., `nick!user@host`).
    pub prefix: Option<Prefix>,
    /// The command and its parameters.
    pub command: Command,
}

impl Message {
    /// Create a PRIVMSG message to a target with text
    #[must_use]
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Command::PRIVMSG(target.into(), text.into()).into()
    }

    /// Create a PONG message with server name and token
    #[must_use]
    pub fn pong(server: impl Into<String>, token: impl Into<String>) -> Self {
        Command::PONG(server.into(), token.into()).into()
    }

    /// Create an ERROR message
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Command::ERROR(text.into()).into()
    }

    /// Attach a prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }
}

impl From<Command> for Message {
    fn from(cmd: Command) -> Message {
        Message {
            prefix: None,
            command: cmd,
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{}\r\n", self.command)
    }
}
