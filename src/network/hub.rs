//! Connection table and outbound queueing.

use std::collections::HashMap;

use super::connection::Connection;
use super::{ClientId, Transport};

/// Every open connection, keyed by handle.
///
/// The hub is the [`Transport`] handed to event handlers. It only touches
/// buffers; changes that need the poller (arming write readiness, closing)
/// are recorded in `pending` and applied by the server after the handler
/// returns.
#[derive(Default)]
pub(crate) struct Hub {
    pub connections: HashMap<ClientId, Connection>,
    pending: Vec<ClientId>,
}

impl Hub {
    pub fn get_mut(&mut self, id: ClientId) -> Option<&mut Connection> {
        self.connections.get_mut(&id)
    }

    pub fn insert(&mut self, conn: Connection) {
        self.connections.insert(conn.id, conn);
    }

    pub fn remove(&mut self, id: ClientId) -> Option<Connection> {
        self.connections.remove(&id)
    }

    pub fn mark_pending(&mut self, id: ClientId) {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
    }

    pub fn take_pending(&mut self) -> Vec<ClientId> {
        std::mem::take(&mut self.pending)
    }
}

impl Transport for Hub {
    fn send_to(&mut self, client: ClientId, data: &str) {
        let Some(conn) = self.connections.get_mut(&client) else {
            return;
        };
        if conn.closing {
            return;
        }
        if conn.queue(data.as_bytes()) {
            self.mark_pending(client);
        }
    }

    fn broadcast(&mut self, data: &str) {
        let ids: Vec<ClientId> = self.connections.keys().copied().collect();
        for id in ids {
            self.send_to(id, data);
        }
    }

    fn disconnect_client(&mut self, client: ClientId) {
        let Some(conn) = self.connections.get_mut(&client) else {
            return;
        };
        if !conn.closing {
            conn.closing = true;
            self.mark_pending(client);
        }
    }

    fn connected_clients_count(&self) -> usize {
        self.connections.len()
    }
}
