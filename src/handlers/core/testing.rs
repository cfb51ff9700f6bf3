//! In-memory transport and engine harness for handler tests.

use std::collections::{BTreeSet, HashMap};
use std::net::SocketAddr;

use crate::handlers::Engine;
use crate::network::{Client, ClientId, EventHandler, Transport};
use crate::state::ServerInfo;

pub const PASSWORD: &str = "abc";

/// Transport that records output per connection.
#[derive(Default)]
pub struct RecordingTransport {
    pub open: BTreeSet<ClientId>,
    pub sent: HashMap<ClientId, Vec<String>>,
    pub disconnect_requests: Vec<ClientId>,
}

impl Transport for RecordingTransport {
    fn send_to(&mut self, client: ClientId, data: &str) {
        if self.open.contains(&client) {
            self.sent.entry(client).or_default().push(data.to_string());
        }
    }

    fn broadcast(&mut self, data: &str) {
        let open: Vec<ClientId> = self.open.iter().copied().collect();
        for id in open {
            self.send_to(id, data);
        }
    }

    fn disconnect_client(&mut self, client: ClientId) {
        self.disconnect_requests.push(client);
    }

    fn connected_clients_count(&self) -> usize {
        self.open.len()
    }
}

/// An [`Engine`] wired to a [`RecordingTransport`].
pub struct TestEngine {
    pub engine: Engine,
    pub out: RecordingTransport,
    next_id: usize,
}

impl TestEngine {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(ServerInfo::new("irc.test", "TestNet"), PASSWORD),
            out: RecordingTransport::default(),
            next_id: 1,
        }
    }

    fn client(id: ClientId) -> Client {
        let addr: SocketAddr = ([127, 0, 0, 1], 40000 + id.get() as u16).into();
        Client { id, addr }
    }

    pub fn connect(&mut self) -> ClientId {
        let id = ClientId::new(self.next_id);
        self.next_id += 1;
        self.out.open.insert(id);
        self.engine.on_connect(&mut self.out, &Self::client(id));
        id
    }

    /// Close a connection the way the multiplexer does.
    pub fn drop_client(&mut self, id: ClientId) {
        self.out.open.remove(&id);
        self.engine.on_disconnect(&mut self.out, &Self::client(id));
    }

    pub fn line(&mut self, id: ClientId, line: &str) {
        self.engine.on_message(&mut self.out, &Self::client(id), line);
    }

    /// Lines sent to `id` since the last call, CRLF removed.
    pub fn take(&mut self, id: ClientId) -> Vec<String> {
        self.out
            .sent
            .remove(&id)
            .unwrap_or_default()
            .into_iter()
            .map(|l| l.trim_end_matches("\r\n").to_string())
            .collect()
    }

    pub fn take_all(&mut self) {
        self.out.sent.clear();
    }

    pub fn was_disconnected(&self, id: ClientId) -> bool {
        self.out.disconnect_requests.contains(&id)
    }

    /// Connect and complete registration as `nick!nick@host`.
    pub fn register(&mut self, nick: &str) -> ClientId {
        let id = self.connect();
        self.line(id, &format!("PASS {PASSWORD}"));
        self.line(id, &format!("NICK {nick}"));
        self.line(id, &format!("USER {nick} host"));
        self.take(id);
        id
    }
}
