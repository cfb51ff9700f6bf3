use std::fmt::{self, Write};

use super::types::Command;
use super::util::{write_cmd, write_cmd_freeform};

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::NICK(n) => write_cmd_freeform(f, "NICK", &[n]),
            Command::JOIN(c) => write_cmd(f, "JOIN", &[c]),
            Command::PART(c, Some(r)) => write_cmd_freeform(f, "PART", &[c, r]),
            Command::PART(c, None) => write_cmd(f, "PART", &[c]),
            Command::PRIVMSG(t, m) => write_cmd_freeform(f, "PRIVMSG", &[t, m]),
            Command::TOPIC(c, t) => write_cmd_freeform(f, "TOPIC", &[c, t]),
            Command::QUIT(r) => write_cmd_freeform(f, "QUIT", &[r]),
            Command::PONG(s, t) => write_cmd_freeform(f, "PONG", &[s, t]),
            Command::CAP(t, sub, caps) => write_cmd_freeform(f, "CAP", &[t, sub, caps]),
            Command::ERROR(m) => write_cmd_freeform(f, "ERROR", &[m]),
            Command::Response(resp, a) => {
                write!(f, "{:03}", resp.code())?;
                if let Some((last, rest)) = a.split_last() {
                    for arg in rest {
                        f.write_char(' ')?;
                        f.write_str(arg)?;
                    }
                    if rest.is_empty() {
                        f.write_char(' ')?;
                        f.write_str(last)?;
                    } else {
                        f.write_str(" :")?;
                        f.write_str(last)?;
                    }
                }
                Ok(())
            }
        }
    }
}
