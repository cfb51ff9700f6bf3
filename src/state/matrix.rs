//! The Matrix - server-wide state owned by the protocol engine.
//!
//! Holds every session, the nickname registry and the channel registry.
//! Everything runs on the multiplexer's thread, so plain maps are enough.
//! Cross-references are by key: a channel stores nicknames, the nickname
//! registry maps them to connection handles, and a handle that no longer
//! resolves is simply "not found".

use std::collections::HashMap;
use std::net::SocketAddr;

use chrono::{DateTime, Utc};

use super::{Channel, Session};
use crate::network::ClientId;

/// Identity of this server as shown in replies.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub network: String,
    pub version: String,
    pub created: DateTime<Utc>,
}

impl ServerInfo {
    pub fn new(name: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            network: network.into(),
            version: format!("plexircd-{}", env!("CARGO_PKG_VERSION")),
            created: Utc::now(),
        }
    }
}

/// Central state container.
pub struct Matrix {
    /// One session per live connection.
    pub sessions: HashMap<ClientId, Session>,
    /// Nickname registry: nickname -> owning connection.
    pub nicks: HashMap<String, ClientId>,
    /// Channel registry, keyed by channel name as given at creation.
    pub channels: HashMap<String, Channel>,
    pub server_info: ServerInfo,
    password: String,
}

impl Matrix {
    pub fn new(server_info: ServerInfo, password: impl Into<String>) -> Self {
        Self {
            sessions: HashMap::new(),
            nicks: HashMap::new(),
            channels: HashMap::new(),
            server_info,
            password: password.into(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    pub fn add_session(&mut self, client: ClientId, addr: SocketAddr) {
        self.sessions.insert(client, Session::new(client, addr));
    }

    pub fn session(&self, client: ClientId) -> Option<&Session> {
        self.sessions.get(&client)
    }

    pub fn session_mut(&mut self, client: ClientId) -> Option<&mut Session> {
        self.sessions.get_mut(&client)
    }

    /// Connection currently holding `nick`, if any.
    pub fn nick_owner(&self, nick: &str) -> Option<ClientId> {
        self.nicks.get(nick).copied()
    }

    /// Move `client` to nickname `new`.
    ///
    /// The registry entry, the session and every channel membership are
    /// updated together. Returns the previous nickname. The caller has
    /// already checked that `new` is free.
    pub fn change_nick(&mut self, client: ClientId, new: &str) -> Option<String> {
        let session = self.sessions.get_mut(&client)?;
        let old = session.nick.replace(new.to_string());

        if let Some(old) = &old {
            self.nicks.remove(old);
            for channel in self.channels.values_mut() {
                channel.rename_member(old, new);
            }
        }
        self.nicks.insert(new.to_string(), client);
        old
    }

    /// Remove `nick` from `channel`, deleting the channel if it empties.
    ///
    /// Returns true if the nickname was a member.
    pub fn remove_from_channel(&mut self, channel: &str, nick: &str) -> bool {
        let Some(chan) = self.channels.get_mut(channel) else {
            return false;
        };
        let removed = chan.remove_member(nick);
        if chan.is_empty() {
            self.channels.remove(channel);
        }
        removed
    }

    /// Remove `nick` from every channel, deleting channels left empty.
    pub fn part_all(&mut self, nick: &str) {
        self.channels.retain(|_, channel| {
            channel.remove_member(nick);
            !channel.is_empty()
        });
    }

    /// Tear down a session: nickname, channel memberships, record.
    pub fn remove_session(&mut self, client: ClientId) -> Option<Session> {
        let session = self.sessions.remove(&client)?;
        if let Some(nick) = &session.nick {
            if self.nicks.get(nick) == Some(&client) {
                self.nicks.remove(nick);
            }
            self.part_all(nick);
        }
        Some(session)
    }

    /// Connection handles of a channel's members, optionally skipping one.
    pub fn channel_recipients(&self, channel: &Channel, except: Option<ClientId>) -> Vec<ClientId> {
        channel
            .members
            .iter()
            .filter_map(|nick| self.nick_owner(nick))
            .filter(|id| Some(*id) != except)
            .collect()
    }
}
