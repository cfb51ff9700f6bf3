//! Channel-related types and state.

use std::collections::BTreeSet;

/// A named group of nicknames with a topic.
///
/// Channels exist only while they have members; the [`Matrix`](super::Matrix)
/// deletes them when the last member leaves.
#[derive(Debug, Clone)]
pub struct Channel {
    pub name: String,
    /// Empty when no topic is set.
    pub topic: String,
    pub members: BTreeSet<String>,
    /// Subset of `members`.
    pub operators: BTreeSet<String>,
}

impl Channel {
    /// Create a channel with `creator` as its first member and operator.
    pub fn new(name: impl Into<String>, creator: &str) -> Self {
        let mut channel = Self {
            name: name.into(),
            topic: String::new(),
            members: BTreeSet::new(),
            operators: BTreeSet::new(),
        };
        channel.members.insert(creator.to_string());
        channel.operators.insert(creator.to_string());
        channel
    }

    pub fn is_member(&self, nick: &str) -> bool {
        self.members.contains(nick)
    }

    pub fn is_operator(&self, nick: &str) -> bool {
        self.operators.contains(nick)
    }

    /// Add a plain member. Returns false if already present.
    pub fn add_member(&mut self, nick: &str) -> bool {
        self.members.insert(nick.to_string())
    }

    /// Remove a nickname from both sets. Returns true if it was a member.
    pub fn remove_member(&mut self, nick: &str) -> bool {
        self.operators.remove(nick);
        self.members.remove(nick)
    }

    /// Move a nickname to a new key in both sets, keeping operator status.
    pub fn rename_member(&mut self, old: &str, new: &str) {
        if self.members.remove(old) {
            self.members.insert(new.to_string());
        }
        if self.operators.remove(old) {
            self.operators.insert(new.to_string());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Name list for RPL_NAMREPLY: operators with `@` first, then the rest.
    pub fn names_list(&self) -> String {
        let ops = self.operators.iter().map(|nick| format!("@{nick}"));
        let plain = self
            .members
            .iter()
            .filter(|nick| !self.operators.contains(*nick))
            .cloned();
        ops.chain(plain).collect::<Vec<_>>().join(" ")
    }
}
