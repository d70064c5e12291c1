//! Tile kinds and their movement, sight and cover rules
//!
//! Costs are integers; a negative cost marks a tile as impassable for that
//! movement type (or as blocking sight for vision).

use serde::{Deserialize, Serialize};

/// Kind of movement a unit uses, selecting a column of the movement cost table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementType {
    Soldier,
    Tires,
    Treads,
    Air,
    Ship,
    Amphibious,
}

impl MovementType {
    /// Does crossing between tile groups cost extra for this movement type?
    pub fn pays_transitions(&self) -> bool {
        matches!(self, MovementType::Amphibious)
    }
}

/// Broad family a tile belongs to; crossing families may cost a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileGroup {
    Land,
    Water,
}

/// Tile kind of a single board position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tile {
    #[default]
    Plain,
    Street,
    Forest,   // Conceals units inside
    Mountain, // Elevated, foot soldiers see further
    River,
    Beach,
    Sea,
    Reef,  // Conceals ships inside
    Cliff, // Impassable, blocks sight
}

impl Tile {
    /// Cost for a unit with the given movement type to enter this tile
    pub fn movement_cost(&self, movement: MovementType) -> i32 {
        use MovementType::*;
        match (self, movement) {
            (Tile::Cliff, Air) => 1,
            (Tile::Cliff, _) => -1,
            (_, Air) => 1,

            (Tile::Plain, Soldier | Treads | Amphibious) => 1,
            (Tile::Plain, Tires) => 2,
            (Tile::Street, Soldier | Tires | Treads | Amphibious) => 1,
            (Tile::Forest, Soldier) => 1,
            (Tile::Forest, Treads | Amphibious) => 2,
            (Tile::Forest, Tires) => 3,
            (Tile::Mountain, Soldier) => 2,
            (Tile::River, Soldier) => 2,
            (Tile::River, Amphibious) => 1,
            (Tile::Beach, Soldier | Treads | Amphibious) => 1,
            (Tile::Beach, Tires) => 2,
            (Tile::Sea, Ship | Amphibious) => 1,
            (Tile::Reef, Ship | Amphibious) => 2,
            _ => -1,
        }
    }

    /// Sight cost when vision passes through this tile
    pub fn vision_cost(&self) -> i32 {
        match self {
            Tile::Mountain => 2,
            Tile::Cliff => -1,
            _ => 1,
        }
    }

    /// Defensive cover value used when choosing where to attack from
    pub fn cover(&self) -> i32 {
        match self {
            Tile::Plain => 10,
            Tile::Street => 0,
            Tile::Forest => 30,
            Tile::Mountain => 40,
            Tile::River => 0,
            Tile::Beach => 5,
            Tile::Sea => 0,
            Tile::Reef => 20,
            Tile::Cliff => 0,
        }
    }

    pub fn group(&self) -> TileGroup {
        match self {
            Tile::Sea | Tile::Reef => TileGroup::Water,
            _ => TileGroup::Land,
        }
    }

    /// Penalty this tile contributes when a unit crosses a group boundary
    pub fn transition_cost(&self) -> i32 {
        match self {
            Tile::Beach | Tile::Sea | Tile::Reef => 1,
            _ => 0,
        }
    }

    /// Does this tile hide its contents from distant viewers?
    pub fn conceals(&self) -> bool {
        matches!(self, Tile::Forest | Tile::Reef)
    }

    /// Is this high ground?
    pub fn is_elevated(&self) -> bool {
        matches!(self, Tile::Mountain)
    }

    /// Single character used by text renderings and scenario files
    pub fn symbol(&self) -> char {
        match self {
            Tile::Plain => '.',
            Tile::Street => '=',
            Tile::Forest => 'F',
            Tile::Mountain => 'M',
            Tile::River => '~',
            Tile::Beach => 'b',
            Tile::Sea => 'S',
            Tile::Reef => 'R',
            Tile::Cliff => '#',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Tile> {
        Some(match symbol {
            '.' => Tile::Plain,
            '=' => Tile::Street,
            'F' => Tile::Forest,
            'M' => Tile::Mountain,
            '~' => Tile::River,
            'b' => Tile::Beach,
            'S' => Tile::Sea,
            'R' => Tile::Reef,
            '#' => Tile::Cliff,
            _ => return None,
        })
    }

    pub fn all() -> [Tile; 9] {
        [
            Tile::Plain,
            Tile::Street,
            Tile::Forest,
            Tile::Mountain,
            Tile::River,
            Tile::Beach,
            Tile::Sea,
            Tile::Reef,
            Tile::Cliff,
        ]
    }
}

/// Transition cost between two tiles for a movement type
pub fn transition_cost(movement: MovementType, from: Tile, to: Tile) -> i32 {
    if !movement.pays_transitions() || from.group() == to.group() {
        return 0;
    }
    from.transition_cost() + to.transition_cost()
}
