//! Units placed on the board
//!
//! A unit does not store its own position; the board keys units by vector.

use serde::{Deserialize, Serialize};

use crate::board::unit_type::{AttackProfile, UnitKind};
use crate::core::types::PlayerId;

/// A unit standing on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    pub player: PlayerId,
    pub fuel: i32,

    // Turn state
    pub moved: bool,
    pub completed: bool,
    pub unfolded: bool,

    pub transports: Vec<Unit>,
}

impl Unit {
    /// Create a fresh unit with full fuel
    pub fn new(kind: UnitKind, player: PlayerId) -> Self {
        Self {
            kind,
            player,
            fuel: kind.properties().fuel,
            moved: false,
            completed: false,
            unfolded: false,
            transports: Vec::new(),
        }
    }

    pub fn with_fuel(mut self, fuel: i32) -> Self {
        self.fuel = fuel;
        self
    }

    pub fn moved(mut self) -> Self {
        self.moved = true;
        self
    }

    pub fn complete(mut self) -> Self {
        self.completed = true;
        self
    }

    /// Enter the entrenched stance; kinds that cannot unfold are unchanged
    pub fn unfold(mut self) -> Self {
        self.unfolded = self.kind.can_unfold();
        self
    }

    pub fn load(mut self, passenger: Unit) -> Self {
        self.transports.push(passenger);
        self
    }

    /// Can this unit still move this turn?
    pub fn can_move(&self) -> bool {
        !self.moved && !self.completed && !self.unfolded
    }

    /// Can this unit still attack this turn?
    pub fn can_attack(&self) -> bool {
        !self.completed && self.kind.attack() != AttackProfile::None
    }

    /// Can `other` board this unit?
    pub fn can_load(&self, other: &Unit) -> bool {
        self.player == other.player
            && self.kind.can_carry(other.kind.movement_type())
            && self.transports.len() < self.kind.properties().transport_capacity
    }
}
