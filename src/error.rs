//! Unified error handling for plexircd.
//!
//! Two families live here: [`ServerError`] for the multiplexer's setup and
//! polling failures, which propagate to the bootstrap code, and
//! [`HandlerError`] for protocol violations, which never leave the command
//! dispatcher and are turned into reply lines instead.

use plexirc_proto::{Message, Prefix, Response};
use thiserror::Error;

// ============================================================================
// Server Errors (socket setup and readiness polling)
// ============================================================================

/// Errors surfaced by the connection multiplexer.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Socket creation, bind, or listen failed. No socket is left open.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// A setting was rejected (malformed bind address, unknown verbosity).
    #[error("invalid server setting: {0}")]
    Settings(String),

    /// The readiness wait itself failed.
    #[error("readiness poll failed: {0}")]
    Poll(#[source] std::io::Error),

    /// `poll()` was called before `activate()` or after `deactivate()`.
    #[error("server is not active")]
    NotActive,
}

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Protocol violations reported by command handlers.
///
/// Every variant maps to one or more reply lines; some also end the
/// connection (see [`HandlerError::disconnects`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("no text to send")]
    NoTextToSend,

    #[error("no recipient given")]
    NoRecipient,

    #[error("no origin specified")]
    NoOrigin,

    #[error("no nickname given")]
    NoNicknameGiven,

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    #[error("erroneous nickname: {0}")]
    ErroneousNickname(String),

    #[error("not registered")]
    NotRegistered,

    #[error("already registered")]
    AlreadyRegistered,

    #[error("no such channel: {0}")]
    NoSuchChannel(String),

    #[error("no such nick: {0}")]
    NoSuchNick(String),

    #[error("not on channel: {0}")]
    NotOnChannel(String),

    /// Wrong or missing connection password; the client is dropped.
    #[error("password mismatch")]
    PasswordMismatch,

    /// USER arrived without both tokens; also reports not-registered.
    #[error("incomplete USER parameters")]
    IncompleteUser,
}

impl HandlerError {
    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::NoTextToSend => "no_text_to_send",
            Self::NoRecipient => "no_recipient",
            Self::NoOrigin => "no_origin",
            Self::NoNicknameGiven => "no_nickname_given",
            Self::NicknameInUse(_) => "nickname_in_use",
            Self::ErroneousNickname(_) => "erroneous_nickname",
            Self::NotRegistered => "not_registered",
            Self::AlreadyRegistered => "already_registered",
            Self::NoSuchChannel(_) => "no_such_channel",
            Self::NoSuchNick(_) => "no_such_nick",
            Self::NotOnChannel(_) => "not_on_channel",
            Self::PasswordMismatch => "password_mismatch",
            Self::IncompleteUser => "incomplete_user",
        }
    }

    /// Whether the connection must be closed after the replies are sent.
    pub fn disconnects(&self) -> bool {
        matches!(self, Self::PasswordMismatch)
    }

    /// Convert to the reply lines the client receives, in order.
    pub fn to_irc_replies(&self, server_name: &str, nick: &str, cmd_name: &str) -> Vec<Message> {
        let replies = match self {
            Self::NeedMoreParams => vec![Response::err_needmoreparams(nick, cmd_name)],
            Self::NoTextToSend => vec![Response::err_notexttosend(nick)],
            Self::NoRecipient => vec![Response::err_norecipient(nick, cmd_name)],
            Self::NoOrigin => vec![Response::err_noorigin(nick)],
            Self::NoNicknameGiven => vec![Response::err_nonicknamegiven(nick)],
            Self::NicknameInUse(bad) => vec![Response::err_nicknameinuse(nick, bad)],
            Self::ErroneousNickname(bad) => vec![Response::err_erroneousnickname(nick, bad)],
            Self::NotRegistered => vec![Response::err_notregistered(nick)],
            Self::AlreadyRegistered => vec![Response::err_alreadyregistered(nick)],
            Self::NoSuchChannel(chan) => vec![Response::err_nosuchchannel(nick, chan)],
            Self::NoSuchNick(target) => vec![Response::err_nosuchnick(nick, target)],
            Self::NotOnChannel(chan) => vec![Response::err_notonchannel(nick, chan)],
            Self::PasswordMismatch => vec![
                Response::err_passwdmismatch(nick),
                Response::err_notregistered(nick),
            ],
            Self::IncompleteUser => vec![
                Response::err_needmoreparams(nick, cmd_name),
                Response::err_notregistered(nick),
            ],
        };

        let prefix = Prefix::ServerName(server_name.to_string());
        let mut replies: Vec<Message> = replies
            .into_iter()
            .map(|msg| msg.with_prefix(prefix.clone()))
            .collect();

        if self.disconnects() {
            replies.push(Message::error("Closing link: (Access denied)"));
        }
        replies
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error_codes() {
        assert_eq!(HandlerError::NeedMoreParams.error_code(), "need_more_params");
        assert_eq!(HandlerError::NotRegistered.error_code(), "not_registered");
        assert_eq!(
            HandlerError::NotOnChannel("#x".into()).error_code(),
            "not_on_channel"
        );
    }

    #[test]
    fn test_password_mismatch_replies_then_error() {
        let lines: Vec<String> = HandlerError::PasswordMismatch
            .to_irc_replies("irc.test", "*", "PASS")
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(
            lines,
            vec![
                ":irc.test 464 * :Password incorrect\r\n",
                ":irc.test 451 * :You have not registered\r\n",
                "ERROR :Closing link: (Access denied)\r\n",
            ]
        );
        assert!(HandlerError::PasswordMismatch.disconnects());
    }

    #[test]
    fn test_need_more_params_names_command() {
        let replies = HandlerError::NeedMoreParams.to_irc_replies("irc.test", "alice", "JOIN");
        assert_eq!(replies.len(), 1);
        assert_eq!(
            replies[0].to_string(),
            ":irc.test 461 alice JOIN :Not enough parameters\r\n"
        );
    }

    #[test]
    fn test_incomplete_user_adds_not_registered() {
        let replies = HandlerError::IncompleteUser.to_irc_replies("irc.test", "*", "USER");
        assert_eq!(replies.len(), 2);
        assert!(!HandlerError::IncompleteUser.disconnects());
    }
}
