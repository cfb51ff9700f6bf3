use crate::response::Response;

/// An outbound command with its parameters.
///
/// Only the commands the server itself emits are represented; inbound lines
/// are handled through [`RawLine`](super::RawLine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `NICK :<new nickname>`
    NICK(String),
    /// `JOIN <channel>`
    JOIN(String),
    /// `PART <channel> [:<reason>]`
    PART(String, Option<String>),
    /// `PRIVMSG <target> :<text>`
    PRIVMSG(String, String),
    /// `TOPIC <channel> :<topic>`
    TOPIC(String, String),
    /// `QUIT :<reason>`
    QUIT(String),
    /// `PONG <server> :<token>`
    PONG(String, String),
    /// `CAP <target> <subcommand> :<capabilities>`
    CAP(String, String, String),
    /// `ERROR :<message>`
    ERROR(String),
    /// Numeric reply; the first argument is the target nickname and the
    /// last one is always written as the trailing parameter.
    Response(Response, Vec<String>),
}
