//! Identities for the things the rules track: NPCs and play sessions.

mod npc;

pub use npc::*;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of an NPC, keyed by its path in the host scene.
///
/// Two handles to the same scene node must produce the same `NpcId`; the
/// roster deduplicates on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NpcId(String);

impl NpcId {
    /// Create an NPC identity from its scene path.
    pub fn from_path(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The scene path this identity was built from.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NpcId {
    fn from(path: &str) -> Self {
        Self::from_path(path)
    }
}

impl std::fmt::Display for NpcId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    /// Create a new random session ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a nil session ID (useful for fixtures).
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
