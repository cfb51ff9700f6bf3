//! Error types for the protocol crate.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing inbound bytes into lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProtocolError {
    /// A line (or an unterminated partial line) exceeded the length limit.
    ///
    /// The offending bytes have already been discarded; decoding can continue.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Number of bytes seen before the line was dropped.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },
}
