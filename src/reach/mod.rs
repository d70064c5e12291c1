//! Reachability queries: movement, sight, attack range and paths
//!
//! Everything is built on one bounded least-cost search
//! ([`search::reachable`]) parameterized by a [`strategy::CostStrategy`].

pub mod attack;
pub mod path;
pub mod query;
pub mod search;
pub mod strategy;

pub use attack::{attackable, attackable_with_vision, Optimize};
pub use path::{
    follow_movement_path, get_movement_path, get_parent_to_move_to, get_path_fields, MovementPath,
};
pub use query::{get_path_cost, moveable, vision_bonus, visible};
pub use search::{reachable, SearchFields, SearchItem};
pub use strategy::{AccessibilityCache, CostStrategy, Movement, NoObstruction, VisionCost};
