//! Board accessor consumed by the reach and vision engine
//!
//! Tiles, units, buildings and players, with the ownership predicates the
//! queries need. Nothing here searches; see `crate::reach` for that.

pub mod building;
pub mod map;
pub mod player;
pub mod tile;
pub mod unit_type;
pub mod units;
pub mod vector;

pub use building::{Building, BuildingKind};
pub use map::Board;
pub use player::{Player, PlayerStatistics, Skill};
pub use tile::{transition_cost, MovementType, Tile, TileGroup};
pub use unit_type::{AttackProfile, UnitKind, UnitProperties};
pub use units::Unit;
pub use vector::{vec2, Vector};
