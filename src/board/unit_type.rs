//! Unit kinds and their default properties

use serde::{Deserialize, Serialize};

use crate::board::tile::MovementType;

/// How a unit attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackProfile {
    /// Cannot attack at all
    None,
    /// Attacks adjacent targets, may move first
    ShortRange,
    /// Fires at targets within a distance band, never after moving
    LongRange { min: i32, max: i32 },
    /// Attacks adjacent targets and, after moving, targets up to `reach` away
    Skirmish { reach: i32 },
}

/// Kind of unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    // Foot
    Infantry, // Standard foot soldiers
    Sniper,   // Unfolds for extra sight
    Pioneer,  // Builders, unarmed

    // Vehicles
    Jeep,      // Fast transport
    Tank,      // Standard armor
    Artillery, // Indirect fire
    Lancer,    // Long-reach skirmisher
    AmphibiousTank,

    // Air and sea
    Helicopter,
    Frigate,
}

/// Default properties for a unit kind
#[derive(Debug, Clone)]
pub struct UnitProperties {
    pub movement_type: MovementType,
    pub vision: i32,          // In tiles
    pub movement_radius: i32, // In cost units
    pub fuel: i32,
    pub attack: AttackProfile,
    pub transport_capacity: usize,
    pub can_unfold: bool,
}

impl UnitKind {
    /// Get default properties for this kind
    pub fn properties(&self) -> UnitProperties {
        use AttackProfile::{LongRange, ShortRange, Skirmish};
        let (movement_type, vision, movement_radius, fuel, attack) = match self {
            UnitKind::Infantry => (MovementType::Soldier, 2, 3, 50, ShortRange),
            UnitKind::Sniper => (MovementType::Soldier, 2, 2, 40, Skirmish { reach: 2 }),
            UnitKind::Pioneer => (MovementType::Soldier, 1, 3, 40, AttackProfile::None),
            UnitKind::Jeep => (MovementType::Tires, 2, 6, 50, AttackProfile::None),
            UnitKind::Tank => (MovementType::Treads, 1, 4, 40, ShortRange),
            UnitKind::Artillery => (MovementType::Treads, 1, 4, 40, LongRange { min: 2, max: 3 }),
            UnitKind::Lancer => (MovementType::Treads, 2, 4, 40, Skirmish { reach: 3 }),
            UnitKind::AmphibiousTank => (MovementType::Amphibious, 1, 4, 50, ShortRange),
            UnitKind::Helicopter => (MovementType::Air, 3, 5, 30, ShortRange),
            UnitKind::Frigate => (MovementType::Ship, 3, 5, 60, ShortRange),
        };

        UnitProperties {
            movement_type,
            vision,
            movement_radius,
            fuel,
            attack,
            transport_capacity: match self {
                UnitKind::Jeep => 1,
                UnitKind::Frigate => 2,
                _ => 0,
            },
            can_unfold: matches!(self, UnitKind::Sniper),
        }
    }

    pub fn movement_type(&self) -> MovementType {
        self.properties().movement_type
    }

    pub fn vision(&self) -> i32 {
        self.properties().vision
    }

    pub fn attack(&self) -> AttackProfile {
        self.properties().attack
    }

    /// Ground unit without a vehicle
    pub fn is_foot_soldier(&self) -> bool {
        self.movement_type() == MovementType::Soldier
    }

    pub fn is_long_range(&self) -> bool {
        matches!(self.attack(), AttackProfile::LongRange { max, .. } if max > 0)
    }

    pub fn can_unfold(&self) -> bool {
        self.properties().can_unfold
    }

    /// Inclusive `(min, max)` distance band this kind can hit from where it stands
    pub fn attack_band(&self) -> Option<(i32, i32)> {
        match self.attack() {
            AttackProfile::None => None,
            AttackProfile::ShortRange => Some((1, 1)),
            AttackProfile::LongRange { min, max } => Some((min, max)),
            AttackProfile::Skirmish { reach } => Some((1, reach)),
        }
    }

    /// Can this kind carry passengers of the given movement type?
    pub fn can_carry(&self, movement: MovementType) -> bool {
        self.properties().transport_capacity > 0 && movement == MovementType::Soldier
    }

    pub fn all() -> [UnitKind; 10] {
        [
            UnitKind::Infantry,
            UnitKind::Sniper,
            UnitKind::Pioneer,
            UnitKind::Jeep,
            UnitKind::Tank,
            UnitKind::Artillery,
            UnitKind::Lancer,
            UnitKind::AmphibiousTank,
            UnitKind::Helicopter,
            UnitKind::Frigate,
        ]
    }
}
