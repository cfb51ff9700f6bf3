//! Numeric reply codes used by the server.
//!
//! The catalogue is a fixed subset of RFC 2812: registration replies,
//! channel join replies, and the error replies the command handlers emit.
//!
//! # Reference
//! - RFC 2812: Internet Relay Chat: Client Protocol

#![allow(non_camel_case_types)]

mod constructors;

use std::fmt;

/// IRC server response code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Response {
    // === Connection Registration (001-099) ===
    /// 001 - Welcome to the IRC network
    RPL_WELCOME = 1,
    /// 002 - Your host is running version
    RPL_YOURHOST = 2,
    /// 003 - Server creation date
    RPL_CREATED = 3,
    /// 004 - Server info (name, version, user modes, channel modes)
    RPL_MYINFO = 4,

    // === Command Responses (200-399) ===
    /// 331 - No topic is set
    RPL_NOTOPIC = 331,
    /// 332 - Channel topic
    RPL_TOPIC = 332,
    /// 353 - Names list
    RPL_NAMREPLY = 353,
    /// 366 - End of names list
    RPL_ENDOFNAMES = 366,

    // === Error Replies (400-599) ===
    /// 401 - No such nick/channel
    ERR_NOSUCHNICK = 401,
    /// 403 - No such channel
    ERR_NOSUCHCHANNEL = 403,
    /// 409 - No origin specified
    ERR_NOORIGIN = 409,
    /// 411 - No recipient given
    ERR_NORECIPIENT = 411,
    /// 412 - No text to send
    ERR_NOTEXTTOSEND = 412,
    /// 431 - No nickname given
    ERR_NONICKNAMEGIVEN = 431,
    /// 432 - Erroneous nickname
    ERR_ERRONEOUSNICKNAME = 432,
    /// 433 - Nickname is already in use
    ERR_NICKNAMEINUSE = 433,
    /// 442 - You're not on that channel
    ERR_NOTONCHANNEL = 442,
    /// 451 - You have not registered
    ERR_NOTREGISTERED = 451,
    /// 461 - Not enough parameters
    ERR_NEEDMOREPARAMS = 461,
    /// 462 - You may not reregister
    ERR_ALREADYREGISTERED = 462,
    /// 464 - Password incorrect
    ERR_PASSWDMISMATCH = 464,
}

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is an error response (4xx, 5xx)
    #[inline]
    pub fn is_error(&self) -> bool {
        (400..600).contains(&self.code())
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.code())
    }
}
