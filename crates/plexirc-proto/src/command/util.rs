use std::fmt::{self, Write};

/// Check if a string needs colon-prefixing as a trailing IRC argument.
pub fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write `cmd` followed by `args`, colon-prefixing the last one only when
/// it would otherwise be misread.
pub fn write_cmd<S: AsRef<str>>(f: &mut fmt::Formatter<'_>, cmd: &str, args: &[S]) -> fmt::Result {
    f.write_str(cmd)?;
    if let Some((last, rest)) = args.split_last() {
        for arg in rest {
            f.write_char(' ')?;
            f.write_str(arg.as_ref())?;
        }
        f.write_char(' ')?;
        if needs_colon_prefix(last.as_ref()) {
            f.write_char(':')?;
        }
        f.write_str(last.as_ref())?;
    }
    Ok(())
}

/// Write `cmd` followed by `args`, always colon-prefixing the last one.
///
/// Used for free-form text (message bodies, reasons, topics).
pub fn write_cmd_freeform<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cmd: &str,
    args: &[S],
) -> fmt::Result {
    f.write_str(cmd)?;
    if let Some((last, rest)) = args.split_last() {
        for arg in rest {
            f.write_char(' ')?;
            f.write_str(arg.as_ref())?;
        }
        f.write_str(" :")?;
        f.write_str(last.as_ref())?;
    }
    Ok(())
}
