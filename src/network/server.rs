//! Single-threaded readiness multiplexer.
//!
//! One [`Server`] owns the listening socket, every client socket and the
//! `mio` poller. Each `poll`/`wait` call accepts pending connections, drains
//! readable sockets into per-connection buffers, dispatches complete lines to
//! the event handler and flushes queued output. Nothing blocks except the
//! bounded readiness wait itself.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use mio::net::TcpListener;
use mio::{Events, Interest, Poll};
use tracing::{debug, error, info, warn};

use super::connection::{Connection, RECV_BUFFER_SIZE, ReadOutcome};
use super::hub::Hub;
use super::{Client, ClientId, EventHandler, Transport};
use crate::config::{ListenConfig, Verbosity};
use crate::error::ServerError;

const EVENTS_CAPACITY: usize = 1024;

/// Readiness of one token, copied out of the event buffer.
#[derive(Debug, Clone, Copy)]
struct Readiness {
    id: ClientId,
    readable: bool,
    writable: bool,
    hangup: bool,
}

/// The connection multiplexer.
pub struct Server {
    listen: ListenConfig,
    poll: Option<Poll>,
    listener: Option<TcpListener>,
    events: Events,
    hub: Hub,
    handler: Option<Box<dyn EventHandler>>,
    verbosity: Verbosity,
    next_id: usize,
    recv_buf: [u8; RECV_BUFFER_SIZE],
}

impl Server {
    pub fn new(listen: ListenConfig) -> Self {
        Self {
            listen,
            poll: None,
            listener: None,
            events: Events::with_capacity(EVENTS_CAPACITY),
            hub: Hub::default(),
            handler: None,
            verbosity: Verbosity::default(),
            next_id: 1,
            recv_buf: [0; RECV_BUFFER_SIZE],
        }
    }

    /// Install the receiver of connect/message/disconnect events.
    pub fn set_event_handler(&mut self, handler: Box<dyn EventHandler>) {
        self.handler = Some(handler);
    }

    /// Set log verbosity: 0 critical only, 1 plus connections, 2 plus payloads.
    pub fn set_verbose(&mut self, level: u8) -> Result<(), ServerError> {
        self.verbosity = Verbosity::from_level(level)?;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.poll.is_some()
    }

    /// Bind the listening socket and create the poller.
    ///
    /// On failure nothing is left open. Calling it again while active is a
    /// no-op.
    pub fn activate(&mut self) -> Result<(), ServerError> {
        if self.is_active() {
            return Ok(());
        }

        let addr = self.listen.socket_addr()?;
        let bind_err = |source: io::Error| ServerError::Bind {
            addr: addr.to_string(),
            source,
        };

        let poll = Poll::new().map_err(bind_err)?;
        let mut listener = TcpListener::bind(addr).map_err(bind_err)?;
        poll.registry()
            .register(&mut listener, ClientId::LISTENER, Interest::READABLE)
            .map_err(bind_err)?;

        let bound = listener.local_addr().unwrap_or(addr);
        info!(addr = %bound, "Listening");

        self.poll = Some(poll);
        self.listener = Some(listener);
        Ok(())
    }

    /// Address the listener is bound to, once active.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }

    /// One non-blocking multiplexing cycle.
    pub fn poll(&mut self) -> Result<(), ServerError> {
        self.wait(Duration::ZERO)
    }

    /// One multiplexing cycle, waiting at most `timeout` for readiness.
    pub fn wait(&mut self, timeout: Duration) -> Result<(), ServerError> {
        let poll = self.poll.as_mut().ok_or(ServerError::NotActive)?;
        match poll.poll(&mut self.events, Some(timeout)) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(e) => return Err(ServerError::Poll(e)),
        }

        let ready: Vec<Readiness> = self
            .events
            .iter()
            .map(|event| Readiness {
                id: ClientId::from_token(event.token()),
                readable: event.is_readable(),
                writable: event.is_writable(),
                hangup: event.is_error() || event.is_read_closed(),
            })
            .collect();

        for event in ready {
            if event.id.token() == ClientId::LISTENER {
                self.accept_all();
                continue;
            }
            if event.readable || event.hangup {
                self.handle_readable(event.id);
            }
            if event.hangup {
                self.teardown(event.id);
                continue;
            }
            if event.writable {
                self.handle_writable(event.id);
            }
        }

        self.apply_pending();
        Ok(())
    }

    /// Close every connection and the listener. Raises no events.
    pub fn deactivate(&mut self) {
        let Some(poll) = self.poll.take() else {
            return;
        };

        for (id, mut conn) in self.hub.connections.drain() {
            if let Err(e) = poll.registry().deregister(&mut conn.stream) {
                error!(client = %id, error = %e, "Failed to deregister connection");
            }
        }
        self.hub.take_pending();

        if let Some(mut listener) = self.listener.take()
            && let Err(e) = poll.registry().deregister(&mut listener)
        {
            error!(error = %e, "Failed to deregister listener");
        }

        if self.verbosity >= Verbosity::Connections {
            info!("Server deactivated");
        }
    }

    pub fn connected_clients_count(&self) -> usize {
        self.hub.connected_clients_count()
    }

    pub fn send_to(&mut self, client: ClientId, data: &str) {
        self.hub.send_to(client, data);
        self.apply_pending();
    }

    pub fn broadcast(&mut self, data: &str) {
        self.hub.broadcast(data);
        self.apply_pending();
    }

    pub fn multisend(&mut self, clients: &[ClientId], data: &str) {
        self.hub.multisend(clients, data);
        self.apply_pending();
    }

    pub fn disconnect_client(&mut self, client: ClientId) {
        self.hub.disconnect_client(client);
        self.apply_pending();
    }

    fn accept_all(&mut self) {
        loop {
            let Some(listener) = self.listener.as_ref() else {
                return;
            };
            let (mut stream, addr) = match listener.accept() {
                Ok(accepted) => accepted,
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "Accept failed");
                    return;
                }
            };

            let id = ClientId::new(self.next_id);
            self.next_id += 1;

            let Some(poll) = self.poll.as_ref() else {
                return;
            };
            if let Err(e) = poll
                .registry()
                .register(&mut stream, id.token(), Interest::READABLE)
            {
                warn!(addr = %addr, error = %e, "Failed to register new connection, dropping it");
                continue;
            }

            self.hub.insert(Connection::new(id, stream, addr));
            if self.verbosity >= Verbosity::Connections {
                info!(client = %id, addr = %addr, "Client connected");
            }

            let client = Client { id, addr };
            if let Some(handler) = self.handler.as_mut() {
                handler.on_connect(&mut self.hub, &client);
            }
            self.apply_pending();
        }
    }

    fn handle_readable(&mut self, id: ClientId) {
        let client = match self.hub.get_mut(id) {
            Some(conn) => Client { id, addr: conn.addr },
            None => return,
        };

        loop {
            let outcome = match self.hub.get_mut(id) {
                Some(conn) if !conn.closing => conn.receive(&mut self.recv_buf),
                _ => return,
            };

            match outcome {
                ReadOutcome::Received(_) => self.dispatch_lines(&client),
                ReadOutcome::Drained => return,
                ReadOutcome::Closed => {
                    self.teardown(id);
                    return;
                }
                ReadOutcome::Failed(e) => {
                    if self.verbosity >= Verbosity::Connections {
                        info!(client = %id, error = %e, "Read failed");
                    }
                    self.teardown(id);
                    return;
                }
            }
        }
    }

    /// Hand every complete buffered line to the handler.
    fn dispatch_lines(&mut self, client: &Client) {
        loop {
            let line = match self.hub.get_mut(client.id) {
                Some(conn) if !conn.closing => conn.next_line(),
                _ => return,
            };
            let Some(line) = line else {
                return;
            };

            if self.verbosity >= Verbosity::Debug {
                debug!(client = %client.id, line = %line, "<<");
            }
            if let Some(handler) = self.handler.as_mut() {
                handler.on_message(&mut self.hub, client, &line);
            }
            self.apply_pending();
        }
    }

    fn handle_writable(&mut self, id: ClientId) {
        let Some(conn) = self.hub.get_mut(id) else {
            return;
        };
        if let Err(e) = conn.flush() {
            if self.verbosity >= Verbosity::Connections {
                info!(client = %id, error = %e, "Write failed");
            }
            self.teardown(id);
            return;
        }
        self.hub.mark_pending(id);
    }

    /// Bring poller interest in line with each changed connection and close
    /// the ones whose disconnect request has finished flushing.
    fn apply_pending(&mut self) {
        loop {
            let pending = self.hub.take_pending();
            if pending.is_empty() {
                return;
            }

            for id in pending {
                let Some(conn) = self.hub.get_mut(id) else {
                    continue;
                };

                if conn.closing {
                    if let Err(e) = conn.flush() {
                        debug!(client = %id, error = %e, "Flush on close failed");
                    }
                    if !conn.has_pending_output() {
                        self.teardown(id);
                        continue;
                    }
                }

                let desired = conn.desired_interest();
                if desired == conn.interest {
                    continue;
                }
                let Some(poll) = self.poll.as_ref() else {
                    continue;
                };
                match poll.registry().reregister(&mut conn.stream, id.token(), desired) {
                    Ok(()) => conn.interest = desired,
                    Err(e) => {
                        warn!(client = %id, error = %e, "Failed to update interest");
                        self.teardown(id);
                    }
                }
            }
        }
    }

    /// Remove a connection and raise the disconnect event.
    fn teardown(&mut self, id: ClientId) {
        let Some(mut conn) = self.hub.remove(id) else {
            return;
        };

        if let Some(poll) = self.poll.as_ref()
            && let Err(e) = poll.registry().deregister(&mut conn.stream)
        {
            error!(client = %id, error = %e, "Failed to deregister connection");
        }

        let client = Client {
            id,
            addr: conn.addr,
        };
        drop(conn);

        if self.verbosity >= Verbosity::Connections {
            info!(client = %id, addr = %client.addr, "Client disconnected");
        }
        if let Some(handler) = self.handler.as_mut() {
            handler.on_disconnect(&mut self.hub, &client);
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        self.deactivate();
    }
}
