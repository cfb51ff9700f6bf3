use std::fmt;

/// The fixed command vocabulary understood by the server.
///
/// Classification is case-insensitive. Anything outside the vocabulary maps
/// to [`CommandKind::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `PASS <password>`
    Pass,
    /// `CAP <subcommand>`
    Cap,
    /// `NICK <nickname>`
    Nick,
    /// `USER <username> <hostname>`
    User,
    /// `JOIN <channel>`
    Join,
    /// `PART <channel> [reason]`
    Part,
    /// `PRIVMSG <target> <text>`
    Privmsg,
    /// `TOPIC <channel> [topic]`
    Topic,
    /// `MODE ...` (recognized, not implemented)
    Mode,
    /// `INVITE ...` (recognized, not implemented)
    Invite,
    /// `KICK ...` (recognized, not implemented)
    Kick,
    /// `QUIT [reason]`
    Quit,
    /// `PING <token>`
    Ping,
    /// Any other token.
    Unknown,
}

impl CommandKind {
    /// Every recognized kind, in protocol order.
    pub const ALL: [CommandKind; 13] = [
        CommandKind::Pass,
        CommandKind::Cap,
        CommandKind::Nick,
        CommandKind::User,
        CommandKind::Join,
        CommandKind::Part,
        CommandKind::Privmsg,
        CommandKind::Topic,
        CommandKind::Mode,
        CommandKind::Invite,
        CommandKind::Kick,
        CommandKind::Quit,
        CommandKind::Ping,
    ];

    /// Classify a command token.
    pub fn from_token(token: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(token))
            .unwrap_or(CommandKind::Unknown)
    }

    /// Canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandKind::Pass => "PASS",
            CommandKind::Cap => "CAP",
            CommandKind::Nick => "NICK",
            CommandKind::User => "USER",
            CommandKind::Join => "JOIN",
            CommandKind::Part => "PART",
            CommandKind::Privmsg => "PRIVMSG",
            CommandKind::Topic => "TOPIC",
            CommandKind::Mode => "MODE",
            CommandKind::Invite => "INVITE",
            CommandKind::Kick => "KICK",
            CommandKind::Quit => "QUIT",
            CommandKind::Ping => "PING",
            CommandKind::Unknown => "UNKNOWN",
        }
    }

    /// Whether this command is part of the registration handshake.
    pub fn is_registration(&self) -> bool {
        matches!(
            self,
            CommandKind::Pass | CommandKind::Cap | CommandKind::Nick | CommandKind::User
        )
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
