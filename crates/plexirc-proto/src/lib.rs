//! # plexirc-proto
//!
//! Wire-level building blocks for the plexircd chat server. Nothing in this
//! crate performs I/O: it frames bytes into lines, classifies command tokens,
//! and renders replies in the CRLF-terminated IRC line format.
//!
//! ## Quick Start
//!
//! ```rust
//! use bytes::BytesMut;
//! use plexirc_proto::{CommandKind, LineCodec, Prefix, RawLine, Response};
//!
//! // Frame a byte stream into lines.
//! let mut codec = LineCodec::new();
//! let mut buf = BytesMut::from(&b"NICK alice\r\nUSER al"[..]);
//! let line = codec.decode(&mut buf).unwrap().unwrap();
//! assert_eq!(line, "NICK alice");
//! assert!(codec.decode(&mut buf).unwrap().is_none());
//!
//! // Split and classify it.
//! let raw = RawLine::parse(&line).unwrap();
//! assert_eq!(raw.kind(), CommandKind::Nick);
//! assert_eq!(raw.tail, "alice");
//!
//! // Render a numeric reply.
//! let reply = Response::err_nosuchnick("alice", "bob")
//!     .with_prefix(Prefix::ServerName("irc.example.net".into()));
//! assert_eq!(
//!     reply.to_string(),
//!     ":irc.example.net 401 alice bob :No such nick/channel\r\n"
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod command;
pub mod error;
pub mod line;
pub mod message;
pub mod nick;
pub mod prefix;
pub mod response;

pub use self::chan::ChannelExt;
pub use self::command::{split_arg, trailing, Command, CommandKind, RawLine};
pub use self::error::ProtocolError;
pub use self::line::{LineCodec, MAX_IRC_LINE_LEN};
pub use self::message::Message;
pub use self::nick::NickExt;
pub use self::prefix::Prefix;
pub use self::response::Response;
