//! Core type definitions used throughout the codebase

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Identifier of a player; 0 is the neutral player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Owner of neutral entities, and the spectator viewer without rights
    pub const NEUTRAL: PlayerId = PlayerId(0);

    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Identifier of a team of players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    pub fn new(id: u8) -> Self {
        Self(id)
    }
}

/// Version stamp of a board snapshot
///
/// Versions come from a process-wide counter and only ever grow, so two
/// structurally different snapshots never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardVersion(pub u64);

static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

impl BoardVersion {
    /// Allocate a fresh version
    pub fn next() -> Self {
        Self(NEXT_VERSION.fetch_add(1, Ordering::Relaxed))
    }
}
