//! Buildings and who may enter them

use serde::{Deserialize, Serialize};

use crate::board::tile::MovementType;
use crate::core::types::PlayerId;

/// Kind of building
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingKind {
    HQ,
    House,
    Factory,
    Shipyard,
    Barrier,   // Blocks all ground and sea movement
    Concealed, // Fogged building; kind unknown to the viewer
}

impl BuildingKind {
    /// Can a unit with this movement type enter the building?
    pub fn is_accessible_by(&self, movement: MovementType) -> bool {
        match self {
            BuildingKind::Barrier => movement == MovementType::Air,
            BuildingKind::Shipyard => true,
            _ => movement != MovementType::Ship,
        }
    }
}

/// A building on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub kind: BuildingKind,
    pub player: PlayerId,
}

impl Building {
    pub fn new(kind: BuildingKind, player: PlayerId) -> Self {
        Self { kind, player }
    }

    pub fn is_accessible_by(&self, movement: MovementType) -> bool {
        self.kind.is_accessible_by(movement)
    }

    /// What a viewer without sight of this building knows: it exists, nothing more
    pub fn hide(&self) -> Self {
        Self {
            kind: BuildingKind::Concealed,
            player: PlayerId::NEUTRAL,
        }
    }
}
