//! Test IRC client.
//!
//! Blocking client with read timeouts. Lines are returned without CRLF.

use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use super::server::PASSWORD;

const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// A test IRC client.
pub struct TestClient {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
    pub nick: String,
}

#[allow(dead_code)]
impl TestClient {
    /// Connect to a test server.
    pub fn connect(addr: SocketAddr, nick: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_read_timeout(Some(READ_TIMEOUT))?;
        stream.set_nodelay(true)?;
        let writer = stream.try_clone()?;
        Ok(Self {
            reader: BufReader::new(stream),
            writer,
            nick: nick.to_string(),
        })
    }

    /// Send a line, appending CRLF if missing.
    pub fn send_raw(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        if !line.ends_with('\n') {
            self.writer.write_all(b"\r\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Send bytes exactly as given.
    pub fn send_bytes(&mut self, bytes: &[u8]) -> anyhow::Result<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Receive one line.
    pub fn recv(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = self.reader.read_line(&mut line)?;
        if n == 0 {
            anyhow::bail!("connection closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Receive lines until `predicate` matches; the matching line is included.
    pub fn recv_until<F>(&mut self, mut predicate: F) -> anyhow::Result<Vec<String>>
    where
        F: FnMut(&str) -> bool,
    {
        let mut lines = Vec::new();
        loop {
            let line = self.recv()?;
            let done = predicate(&line);
            lines.push(line);
            if done {
                return Ok(lines);
            }
        }
    }

    /// Everything the server sent before answering a PING barrier.
    pub fn sync(&mut self) -> anyhow::Result<Vec<String>> {
        self.send_raw("PING sync-barrier")?;
        let mut lines = self.recv_until(|l| l.ends_with("PONG test.server :sync-barrier"))?;
        lines.pop();
        Ok(lines)
    }

    /// Complete the handshake and consume the 001-004 burst.
    pub fn register(&mut self) -> anyhow::Result<Vec<String>> {
        self.send_raw(&format!("PASS {PASSWORD}"))?;
        self.send_raw(&format!("NICK {}", self.nick))?;
        self.send_raw(&format!("USER {} host", self.nick))?;
        let burst = self.recv_until(|l| numeric(l) == Some(4))?;
        if burst.len() != 4 {
            anyhow::bail!("unexpected registration output: {burst:?}");
        }
        Ok(burst)
    }

    pub fn join(&mut self, channel: &str) -> anyhow::Result<Vec<String>> {
        self.send_raw(&format!("JOIN {channel}"))?;
        self.recv_until(|l| numeric(l) == Some(366))
    }

    pub fn privmsg(&mut self, target: &str, text: &str) -> anyhow::Result<()> {
        self.send_raw(&format!("PRIVMSG {target} :{text}"))
    }

    /// Wait until the server closes the connection, returning unread lines.
    pub fn expect_closed(&mut self) -> anyhow::Result<Vec<String>> {
        let mut lines = Vec::new();
        loop {
            let mut line = String::new();
            match self.reader.read_line(&mut line) {
                Ok(0) => return Ok(lines),
                Ok(_) => lines.push(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(e) if e.kind() == ErrorKind::ConnectionReset => return Ok(lines),
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Close the socket without QUIT.
    pub fn hang_up(self) {
        let _ = self.writer.shutdown(Shutdown::Both);
    }
}

/// Numeric code of a server reply line, if it is one.
pub fn numeric(line: &str) -> Option<u16> {
    line.split(' ').nth(1)?.parse().ok()
}
