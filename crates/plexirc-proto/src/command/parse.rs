use super::kind::CommandKind;

/// One inbound line split at its single split point.
///
/// The core parser does not tokenize arguments: each command handler takes
/// the `tail` apart itself with [`split_arg`] and [`trailing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// The command token as sent.
    pub command: &'a str,
    /// Everything after the command token, leading spaces removed.
    pub tail: &'a str,
}

impl<'a> RawLine<'a> {
    /// Split a line into command token and tail.
    ///
    /// Trailing CR/LF is stripped and a leading `:prefix` is skipped.
    /// Returns `None` for a line with no command token.
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut rest = line.trim_end_matches(['\r', '\n']).trim_start_matches(' ');

        if rest.starts_with(':') {
            let (_prefix, after) = split_arg(rest);
            rest = after;
        }

        let (command, tail) = split_arg(rest);
        if command.is_empty() {
            return None;
        }

        Some(Self { command, tail })
    }

    /// Classify the command token.
    pub fn kind(&self) -> CommandKind {
        CommandKind::from_token(self.command)
    }
}

/// Split off the first space-delimited word.
///
/// Returns `(word, rest)` with leading spaces trimmed from both parts.
pub fn split_arg(s: &str) -> (&str, &str) {
    let s = s.trim_start_matches(' ');
    match s.split_once(' ') {
        Some((word, rest)) => (word, rest.trim_start_matches(' ')),
        None => (s, ""),
    }
}

/// Interpret the rest of a line as free-form text.
///
/// A single leading `:` marks the trailing parameter and is removed.
pub fn trailing(s: &str) -> &str {
    s.strip_prefix(':').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_once() {
        let raw = RawLine::parse("PRIVMSG #test :hello there\r\n").unwrap();
        assert_eq!(raw.command, "PRIVMSG");
        assert_eq!(raw.tail, "#test :hello there");
        assert_eq!(raw.kind(), CommandKind::Privmsg);
    }

    #[test]
    fn test_parse_without_tail() {
        let raw = RawLine::parse("QUIT").unwrap();
        assert_eq!(raw.command, "QUIT");
        assert_eq!(raw.tail, "");
    }

    #[test]
    fn test_parse_skips_prefix() {
        let raw = RawLine::parse(":alice!a@h JOIN #rust").unwrap();
        assert_eq!(raw.kind(), CommandKind::Join);
        assert_eq!(raw.tail, "#rust");
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(RawLine::parse("\r\n").is_none());
        assert!(RawLine::parse("   ").is_none());
        assert!(RawLine::parse(":prefixonly").is_none());
    }

    #[test]
    fn test_split_arg() {
        assert_eq!(split_arg("alice  host extra"), ("alice", "host extra"));
        assert_eq!(split_arg("single"), ("single", ""));
        assert_eq!(split_arg(""), ("", ""));
    }

    #[test]
    fn test_trailing() {
        assert_eq!(trailing(":hi there"), "hi there");
        assert_eq!(trailing("hi"), "hi");
        assert_eq!(trailing(":"), "");
        assert_eq!(trailing("::smile"), ":smile");
    }
}
