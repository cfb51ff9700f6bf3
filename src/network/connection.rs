//! Per-connection socket state.

use std::io::{self, Read, Write};
use std::net::SocketAddr;

use bytes::{Buf, BytesMut};
use mio::Interest;
use mio::net::TcpStream;
use plexirc_proto::LineCodec;
use tracing::warn;

use super::ClientId;

/// Size of the transfer buffer used for each receive.
pub(crate) const RECV_BUFFER_SIZE: usize = 512;

/// Result of one receive on a readable socket.
#[derive(Debug)]
pub(crate) enum ReadOutcome {
    /// Bytes were appended to the inbound buffer.
    Received(usize),
    /// The socket would block; the connection stays open.
    Drained,
    /// The peer closed its side in an orderly way.
    Closed,
    /// Reset, timeout or any other OS error.
    Failed(io::Error),
}

/// One accepted TCP connection and its buffers.
pub(crate) struct Connection {
    pub id: ClientId,
    pub stream: TcpStream,
    pub addr: SocketAddr,
    inbound: BytesMut,
    outbound: BytesMut,
    codec: LineCodec,
    /// Interest currently registered with the poller.
    pub interest: Interest,
    /// Set by a disconnect request: no more reads, flush then close.
    pub closing: bool,
}

impl Connection {
    pub fn new(id: ClientId, stream: TcpStream, addr: SocketAddr) -> Self {
        Self {
            id,
            stream,
            addr,
            inbound: BytesMut::with_capacity(RECV_BUFFER_SIZE),
            outbound: BytesMut::new(),
            codec: LineCodec::new(),
            interest: Interest::READABLE,
            closing: false,
        }
    }

    /// Receive one chunk into the inbound buffer.
    ///
    /// The caller drains complete lines between receives so an unterminated
    /// stream never holds more than one chunk past the line limit.
    pub fn receive(&mut self, buf: &mut [u8; RECV_BUFFER_SIZE]) -> ReadOutcome {
        loop {
            match self.stream.read(buf) {
                Ok(0) => return ReadOutcome::Closed,
                Ok(n) => {
                    self.inbound.extend_from_slice(&buf[..n]);
                    return ReadOutcome::Received(n);
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return ReadOutcome::Drained,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return ReadOutcome::Failed(e),
            }
        }
    }

    /// Next complete line from the inbound buffer.
    ///
    /// Overlong lines are dropped with a warning.
    pub fn next_line(&mut self) -> Option<String> {
        loop {
            match self.codec.decode(&mut self.inbound) {
                Ok(line) => return line,
                Err(e) => warn!(client = %self.id, addr = %self.addr, error = %e, "Dropping inbound line"),
            }
        }
    }

    /// Append to the outbound buffer. Returns true if it was empty before.
    pub fn queue(&mut self, data: &[u8]) -> bool {
        let was_empty = self.outbound.is_empty();
        self.outbound.extend_from_slice(data);
        was_empty && !data.is_empty()
    }

    pub fn has_pending_output(&self) -> bool {
        !self.outbound.is_empty()
    }

    /// Write until the outbound buffer is empty or the socket would block.
    ///
    /// On error the remaining output is discarded.
    pub fn flush(&mut self) -> io::Result<()> {
        while !self.outbound.is_empty() {
            match self.stream.write(&self.outbound) {
                Ok(0) => {
                    self.outbound.clear();
                    return Err(io::ErrorKind::WriteZero.into());
                }
                Ok(n) => self.outbound.advance(n),
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.outbound.clear();
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    /// Interest the poller should hold for this connection now.
    pub fn desired_interest(&self) -> Interest {
        if self.has_pending_output() {
            Interest::READABLE | Interest::WRITABLE
        } else {
            Interest::READABLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plexirc_proto::MAX_IRC_LINE_LEN;
    use std::time::{Duration, Instant};

    fn pair() -> (std::net::TcpStream, Connection) {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let client = std::net::TcpStream::connect(listener.local_addr().unwrap()).unwrap();
        let (accepted, addr) = listener.accept().unwrap();
        accepted.set_nonblocking(true).unwrap();
        let conn = Connection::new(ClientId::new(1), TcpStream::from_std(accepted), addr);
        (client, conn)
    }

    /// Receive and drain lines until `want` bytes arrived, returning the lines.
    fn pump(conn: &mut Connection, want: usize) -> Vec<String> {
        let mut buf = [0u8; RECV_BUFFER_SIZE];
        let mut got = 0;
        let mut lines = Vec::new();
        let deadline = Instant::now() + Duration::from_secs(5);
        while got < want && Instant::now() < deadline {
            match conn.receive(&mut buf) {
                ReadOutcome::Received(n) => got += n,
                ReadOutcome::Drained => std::thread::sleep(Duration::from_millis(5)),
                other => panic!("unexpected read outcome: {other:?}"),
            }
            while let Some(line) = conn.next_line() {
                lines.push(line);
            }
            assert!(conn.inbound.len() <= MAX_IRC_LINE_LEN + RECV_BUFFER_SIZE);
        }
        assert_eq!(got, want);
        lines
    }

    #[test]
    fn test_unterminated_stream_stays_bounded() {
        let (mut client, mut conn) = pair();

        client.write_all(&[b'a'; 64 * 1024]).unwrap();
        assert!(pump(&mut conn, 64 * 1024).is_empty());

        client.write_all(b"aaa\r\nPING ok\r\n").unwrap();
        assert_eq!(pump(&mut conn, 14), vec!["PING ok"]);
    }

    #[test]
    fn test_desired_interest_follows_outbound_queue() {
        let (_client, mut conn) = pair();
        assert_eq!(conn.desired_interest(), Interest::READABLE);

        assert!(conn.queue(b"PING x\r\n"));
        assert!(!conn.queue(b"PING y\r\n"));
        assert_eq!(conn.desired_interest(), Interest::READABLE | Interest::WRITABLE);

        conn.flush().unwrap();
        assert!(!conn.has_pending_output());
        assert_eq!(conn.desired_interest(), Interest::READABLE);
    }
}
