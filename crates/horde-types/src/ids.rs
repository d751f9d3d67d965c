//! Type-safe identifier wrapper around [`Uuid`].
//!
//! Agents are identified by a random (v4-layout) UUID built from bytes the
//! caller supplies. The swarm draws those bytes from its seeded RNG, so two
//! runs with the same seed produce the same identifiers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::{Builder, Uuid};

/// Unique identifier for an agent in the swarm.
///
/// Identifiers survive the removal of other agents, which is what lets a
/// delayed chorus press detect that its target no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AgentId(pub Uuid);

impl AgentId {
    /// Build an identifier from 16 random bytes.
    ///
    /// Version and variant bits are overwritten so the result is a valid
    /// v4 UUID.
    pub const fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Return the inner [`Uuid`] value.
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl core::fmt::Display for AgentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for AgentId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<AgentId> for Uuid {
    fn from(id: AgentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_id() {
        let a = AgentId::from_random_bytes([7; 16]);
        let b = AgentId::from_random_bytes([7; 16]);
        assert_eq!(a, b);
        assert_eq!(a.into_inner().get_version_num(), 4);
    }

    #[test]
    fn different_bytes_different_id() {
        let a = AgentId::from_random_bytes([1; 16]);
        let b = AgentId::from_random_bytes([2; 16]);
        assert_ne!(a, b);
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = AgentId::from_random_bytes([3; 16]);
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }
}
