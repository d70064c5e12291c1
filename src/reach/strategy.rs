//! Cost strategies parameterizing the reachability search
//!
//! A strategy answers four questions: what it costs to enter a tile, how much
//! total cost the unit can afford, what crossing between tile groups adds, and
//! whether the unit may enter a tile at all. The trait defaults answer them
//! the way movement does, so a custom strategy only overrides what differs.

use std::cell::RefCell;

use ahash::AHashMap;

use crate::board::{transition_cost, Board, MovementType, Tile, Unit, UnitKind, Vector};
use crate::core::types::{BoardVersion, PlayerId};

/// Pluggable cost model for [`crate::reach::search::reachable`]
pub trait CostStrategy {
    /// Cost to enter `vector`; negative means impassable
    fn tile_cost(&self, board: &Board, unit: &Unit, vector: Vector) -> i32 {
        board.tile(vector).movement_cost(unit.kind.movement_type())
    }

    /// Hard ceiling on the accumulated cost
    fn resource_ceiling(&self, unit: &Unit) -> i32 {
        unit.fuel
    }

    /// Extra cost for stepping from a `from` tile onto a `to` tile
    fn transition_cost(&self, kind: UnitKind, from: Tile, to: Tile) -> i32 {
        transition_cost(kind.movement_type(), from, to)
    }

    /// May `unit` enter or pass through `vector`?
    fn is_accessible(&self, board: &Board, unit: &Unit, vector: Vector) -> bool {
        is_accessible(board, unit, vector)
    }
}

/// Movement accessibility: opponents and closed buildings block the way
pub fn is_accessible(board: &Board, unit: &Unit, vector: Vector) -> bool {
    if let Some(occupant) = board.unit_at(vector) {
        if board.is_opponent(occupant.player, unit.player) {
            return false;
        }
    }

    if let Some(building) = board.building_at(vector) {
        if !building.is_accessible_by(unit.kind.movement_type()) {
            return false;
        }
    }

    true
}

type AccessKey = (PlayerId, MovementType, Vector);

/// Memoized accessibility for a single board version
///
/// Results depend on the owner and movement type of the asking unit as well
/// as on the board, so all three are part of the key. Entries for any other
/// board version are dropped the moment a new version is queried.
#[derive(Debug, Default)]
pub struct AccessibilityCache {
    inner: RefCell<(Option<BoardVersion>, AHashMap<AccessKey, bool>)>,
}

impl AccessibilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_accessible(&self, board: &Board, unit: &Unit, vector: Vector) -> bool {
        let mut inner = self.inner.borrow_mut();
        let (version, entries) = &mut *inner;

        if *version != Some(board.version()) {
            entries.clear();
            *version = Some(board.version());
        }

        *entries
            .entry((unit.player, unit.kind.movement_type(), vector))
            .or_insert_with(|| is_accessible(board, unit, vector))
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Regular unit movement
#[derive(Debug, Default)]
pub struct Movement {
    cache: AccessibilityCache,
}

impl Movement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cache(&self) -> &AccessibilityCache {
        &self.cache
    }
}

impl CostStrategy for Movement {
    fn is_accessible(&self, board: &Board, unit: &Unit, vector: Vector) -> bool {
        self.cache.is_accessible(board, unit, vector)
    }
}

/// Line of sight: occupants never block, only tiles do
#[derive(Debug, Default, Clone, Copy)]
pub struct VisionCost;

impl CostStrategy for VisionCost {
    fn tile_cost(&self, board: &Board, _unit: &Unit, vector: Vector) -> i32 {
        board.tile(vector).vision_cost()
    }

    fn resource_ceiling(&self, _unit: &Unit) -> i32 {
        i32::MAX
    }

    fn transition_cost(&self, _kind: UnitKind, _from: Tile, _to: Tile) -> i32 {
        0
    }

    fn is_accessible(&self, _board: &Board, _unit: &Unit, _vector: Vector) -> bool {
        true
    }
}

/// Movement that ignores occupants and buildings, for planning ahead
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObstruction;

impl CostStrategy for NoObstruction {
    fn is_accessible(&self, _board: &Board, _unit: &Unit, _vector: Vector) -> bool {
        true
    }
}
