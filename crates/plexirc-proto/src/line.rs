//! Line framing for inbound byte streams.
//!
//! Bytes arrive from the socket in arbitrary chunks. [`LineCodec`] pulls
//! complete lines out of a per-connection accumulator and leaves any
//! unterminated tail in place until more bytes arrive.

use bytes::{Buf, BytesMut};

use crate::error::{ProtocolError, Result};

/// Maximum length of a protocol line in bytes, including the CRLF.
pub const MAX_IRC_LINE_LEN: usize = 512;

/// Splits an accumulator into protocol lines.
///
/// `\r\n`, `\n` and a bare `\r` all terminate a line. Empty lines are
/// skipped and the terminator is never part of the returned string. Lines
/// longer than the limit are dropped whole: the decoder reports
/// [`ProtocolError::MessageTooLong`] once and then discards bytes up to the
/// next terminator. Decoding may continue after that error.
#[derive(Debug)]
pub struct LineCodec {
    /// Index of next byte to check for a terminator
    next_index: usize,
    /// Maximum line length
    max_len: usize,
    /// Set while the remainder of an overlong line is being dropped
    discarding: bool,
}

impl Default for LineCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl LineCodec {
    /// Create a codec with the standard 512-byte limit.
    pub fn new() -> Self {
        Self::with_max_len(MAX_IRC_LINE_LEN)
    }

    /// Create a codec with a custom line length limit.
    pub fn with_max_len(max_len: usize) -> Self {
        Self {
            next_index: 0,
            max_len,
            discarding: false,
        }
    }

    /// Extract the next complete line from `src`.
    ///
    /// Returns `Ok(None)` when no complete line is buffered yet.
    pub fn decode(&mut self, src: &mut BytesMut) -> Result<Option<String>> {
        loop {
            let found = src[self.next_index..]
                .iter()
                .position(|b| *b == b'\n' || *b == b'\r');

            let Some(offset) = found else {
                if self.discarding {
                    src.clear();
                    self.next_index = 0;
                    return Ok(None);
                }

                if src.len() > self.max_len {
                    let actual = src.len();
                    src.clear();
                    self.next_index = 0;
                    self.discarding = true;
                    return Err(ProtocolError::MessageTooLong {
                        actual,
                        limit: self.max_len,
                    });
                }

                self.next_index = src.len();
                return Ok(None);
            };

            let end = self.next_index + offset;
            self.next_index = 0;
            let line = src.split_to(end);
            src.advance(1);

            if self.discarding {
                self.discarding = false;
                continue;
            }

            if line.is_empty() {
                continue;
            }

            // Room for the CRLF the sender used (or should have used).
            if line.len() + 2 > self.max_len {
                return Err(ProtocolError::MessageTooLong {
                    actual: line.len() + 2,
                    limit: self.max_len,
                });
            }

            return Ok(Some(String::from_utf8_lossy(&line).into_owned()));
        }
    }
}
