//! Semantic reply constructors for `Response`.
//!
//! Each constructor returns a prefix-less [`Message`]; callers attach the
//! server prefix with [`Message::with_prefix`].

use crate::command::Command;
use crate::message::Message;
use crate::response::Response;

macro_rules! impl_err {
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str) -> Message {
            Self::reply_msg(
                Response::$resp,
                vec![client.to_string(), $msg.to_string()],
            )
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $resp:ident, $arg:ident, $msg:literal
    ) => {
        $(#[$meta])*
        pub fn $name(client: &str, $arg: &str) -> Message {
            Self::reply_msg(
                Response::$resp,
                vec![
                    client.to_string(),
                    $arg.to_string(),
                    $msg.to_string(),
                ],
            )
        }
    };
}

impl Response {
    /// Helper to construct a Message with a Response command.
    fn reply_msg(response: Response, args: Vec<String>) -> Message {
        Message::from(Command::Response(response, args))
    }

    // === 001-004 Registration ===

    /// `001 RPL_WELCOME`
    pub fn rpl_welcome(client: &str, network: &str, signature: &str) -> Message {
        Self::reply_msg(
            Response::RPL_WELCOME,
            vec![
                client.to_string(),
                format!("Welcome to the {network} IRC network, {signature}"),
            ],
        )
    }

    /// `002 RPL_YOURHOST`
    pub fn rpl_yourhost(client: &str, server: &str, version: &str) -> Message {
        Self::reply_msg(
            Response::RPL_YOURHOST,
            vec![
                client.to_string(),
                format!("Your host is {server}, running version {version}"),
            ],
        )
    }

    /// `003 RPL_CREATED`
    pub fn rpl_created(client: &str, created: &str) -> Message {
        Self::reply_msg(
            Response::RPL_CREATED,
            vec![
                client.to_string(),
                format!("This server was created {created}"),
            ],
        )
    }

    /// `004 RPL_MYINFO`
    /// `<servername> <version> <usermodes> <chanmodes>`
    pub fn rpl_myinfo(client: &str, server: &str, version: &str) -> Message {
        Self::reply_msg(
            Response::RPL_MYINFO,
            vec![
                client.to_string(),
                format!("{server} {version} o o"),
            ],
        )
    }

    // === 331-366 Channel replies ===

    impl_err!(
        /// `331 RPL_NOTOPIC`
        rpl_notopic, RPL_NOTOPIC, channel, "No topic is set"
    );

    /// `332 RPL_TOPIC`
    pub fn rpl_topic(client: &str, channel: &str, topic: &str) -> Message {
        Self::reply_msg(
            Response::RPL_TOPIC,
            vec![client.to_string(), channel.to_string(), topic.to_string()],
        )
    }

    /// `353 RPL_NAMREPLY`
    /// `= <channel> :<names>`
    pub fn rpl_namreply(client: &str, channel: &str, names: &str) -> Message {
        Self::reply_msg(
            Response::RPL_NAMREPLY,
            vec![
                client.to_string(),
                "=".to_string(),
                channel.to_string(),
                names.to_string(),
            ],
        )
    }

    impl_err!(
        /// `366 RPL_ENDOFNAMES`
        rpl_endofnames, RPL_ENDOFNAMES, channel, "End of /NAMES list"
    );

    // === 400-499 Error Replies ===

    impl_err!(
        /// `401 ERR_NOSUCHNICK`
        err_nosuchnick, ERR_NOSUCHNICK, target, "No such nick/channel"
    );

    impl_err!(
        /// `403 ERR_NOSUCHCHANNEL`
        err_nosuchchannel, ERR_NOSUCHCHANNEL, channel, "No such channel"
    );

    impl_err!(
        /// `409 ERR_NOORIGIN`
        err_noorigin, ERR_NOORIGIN, "No origin specified"
    );

    impl_err!(
        /// `411 ERR_NORECIPIENT`
        err_norecipient, ERR_NORECIPIENT, command, "No recipient given"
    );

    impl_err!(
        /// `412 ERR_NOTEXTTOSEND`
        err_notexttosend, ERR_NOTEXTTOSEND, "No text to send"
    );

    impl_err!(
        /// `431 ERR_NONICKNAMEGIVEN`
        err_nonicknamegiven, ERR_NONICKNAMEGIVEN, "No nickname given"
    );

    impl_err!(
        /// `432 ERR_ERRONEOUSNICKNAME`
        err_erroneousnickname, ERR_ERRONEOUSNICKNAME, nick, "Erroneous nickname"
    );

    impl_err!(
        /// `433 ERR_NICKNAMEINUSE`
        err_nicknameinuse, ERR_NICKNAMEINUSE, nick, "Nickname is already in use"
    );

    impl_err!(
        /// `442 ERR_NOTONCHANNEL`
        err_notonchannel, ERR_NOTONCHANNEL, channel, "You're not on that channel"
    );

    impl_err!(
        /// `451 ERR_NOTREGISTERED`
        err_notregistered, ERR_NOTREGISTERED, "You have not registered"
    );

    impl_err!(
        /// `461 ERR_NEEDMOREPARAMS`
        err_needmoreparams, ERR_NEEDMOREPARAMS, command, "Not enough parameters"
    );

    impl_err!(
        /// `462 ERR_ALREADYREGISTERED`
        err_alreadyregistered, ERR_ALREADYREGISTERED, "You may not reregister"
    );

    impl_err!(
        /// `464 ERR_PASSWDMISMATCH`
        err_passwdmismatch, ERR_PASSWDMISMATCH, "Password incorrect"
    );
}
