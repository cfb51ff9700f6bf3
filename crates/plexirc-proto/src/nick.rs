//! Nickname validation.

/// Characters that may never appear in a nickname.
///
/// `#` would make it look like a channel, `:` would break the trailing
/// parameter, `;` and space would break the prefix.
pub const FORBIDDEN_NICK_CHARS: [char; 4] = ['#', ':', ';', ' '];

/// Extension trait for checking if a string is an acceptable nickname.
pub trait NickExt {
    /// A nickname is valid when it is non-empty and contains none of
    /// [`FORBIDDEN_NICK_CHARS`].
    ///
    /// ```
    /// use plexirc_proto::NickExt;
    ///
    /// assert!("alice".is_valid_nick());
    /// assert!("[cool]".is_valid_nick());
    /// assert!(!"bad nick".is_valid_nick());
    /// assert!(!"#chan".is_valid_nick());
    /// ```
    fn is_valid_nick(&self) -> bool;
}

impl NickExt for &str {
    fn is_valid_nick(&self) -> bool {
        !self.is_empty() && !self.contains(FORBIDDEN_NICK_CHARS)
    }
}

impl NickExt for String {
    fn is_valid_nick(&self) -> bool {
        self.as_str().is_valid_nick()
    }
}
