//! Channel name utilities.
//!
//! # Reference
//! - RFC 2812 Section 1.3: Channel names

/// Extension trait for checking if a string is a valid IRC channel name.
pub trait ChannelExt {
    /// Whether this string names a channel rather than a nickname: it starts
    /// with `#` or `&`.
    fn is_channel_target(&self) -> bool;

    /// Check if this string is a valid IRC channel name.
    ///
    /// Valid channel names:
    /// - Start with '#' or '&'
    /// - Do not contain space, comma, BEL (0x07), or NUL
    /// - Are at most 50 characters long
    fn is_channel_name(&self) -> bool;
}

impl ChannelExt for &str {
    fn is_channel_target(&self) -> bool {
        self.starts_with(['#', '&'])
    }

    fn is_channel_name(&self) -> bool {
        if !self.is_channel_target() || self.len() < 2 {
            return false;
        }

        // Length limit (RFC 2812 says 50 chars including prefix)
        if self.chars().count() > 50 {
            return false;
        }

        !self
            .chars()
            .any(|c| c == ' ' || c == ',' || c == '\x07' || c == '\0' || c.is_control())
    }
}

impl ChannelExt for String {
    fn is_channel_target(&self) -> bool {
        self.as_str().is_channel_target()
    }

    fn is_channel_name(&self) -> bool {
        self.as_str().is_channel_name()
    }
}
