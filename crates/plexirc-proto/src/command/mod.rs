//! Command classification, tail splitting and outbound command types.

mod kind;
mod parse;
mod serialize;
mod types;
pub(crate) mod util;

pub use kind::CommandKind;
pub use parse::{split_arg, trailing, RawLine};
pub use types::Command;
