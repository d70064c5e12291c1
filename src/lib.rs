//! Gridreach - movement, sight and attack range for grid strategy games

pub mod board;
pub mod core;
pub mod reach;
pub mod scenario;
pub mod vision;
