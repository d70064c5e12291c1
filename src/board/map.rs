//! The board: tile grid plus units, buildings and players
//!
//! Boards are snapshots. Every mutation stamps a fresh [`BoardVersion`], so
//! caches keyed by version never serve results for a different layout.

use ahash::AHashMap;

use crate::board::building::Building;
use crate::board::player::Player;
use crate::board::tile::Tile;
use crate::board::units::Unit;
use crate::board::vector::Vector;
use crate::core::error::{GridError, Result};
use crate::core::types::{BoardVersion, PlayerId, TeamId};

/// The full board
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
    units: AHashMap<Vector, Unit>,
    buildings: AHashMap<Vector, Building>,
    players: Vec<Player>,
    fog: bool,
    version: BoardVersion,
}

impl Board {
    /// Create a new board covered in plains
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            tiles: vec![Tile::Plain; (width * height) as usize],
            units: AHashMap::new(),
            buildings: AHashMap::new(),
            players: Vec::new(),
            fog: false,
            version: BoardVersion::next(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn version(&self) -> BoardVersion {
        self.version
    }

    pub fn fog_enabled(&self) -> bool {
        self.fog
    }

    /// Check if a vector is within board bounds
    pub fn contains(&self, vector: Vector) -> bool {
        vector.x >= 1 && vector.y >= 1 && vector.x <= self.width && vector.y <= self.height
    }

    /// Row-major index of an in-bounds vector
    pub fn index(&self, vector: Vector) -> Option<usize> {
        self.contains(vector)
            .then(|| ((vector.y - 1) * self.width + (vector.x - 1)) as usize)
    }

    /// Every in-bounds vector, row by row
    pub fn vectors(&self) -> impl Iterator<Item = Vector> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Vector::new(x, y)))
    }

    pub fn get_tile(&self, vector: Vector) -> Option<Tile> {
        self.index(vector).map(|index| self.tiles[index])
    }

    pub fn try_tile(&self, vector: Vector) -> Result<Tile> {
        self.get_tile(vector).ok_or(GridError::OutOfBounds {
            vector,
            width: self.width,
            height: self.height,
        })
    }

    /// Tile at an in-bounds vector
    ///
    /// # Panics
    /// Panics when `vector` is off the board. Callers test [`Board::contains`]
    /// first; an out-of-bounds lookup is a programming error.
    pub fn tile(&self, vector: Vector) -> Tile {
        match self.try_tile(vector) {
            Ok(tile) => tile,
            Err(error) => panic!("{error}"),
        }
    }

    /// Set terrain at a vector
    pub fn set_tile(&mut self, vector: Vector, tile: Tile) {
        if let Some(index) = self.index(vector) {
            self.tiles[index] = tile;
            self.touch();
        }
    }

    pub fn set_fog(&mut self, fog: bool) {
        self.fog = fog;
        self.touch();
    }

    pub fn unit_at(&self, vector: Vector) -> Option<&Unit> {
        self.units.get(&vector)
    }

    pub fn units(&self) -> impl Iterator<Item = (Vector, &Unit)> + '_ {
        self.units.iter().map(|(vector, unit)| (*vector, unit))
    }

    /// Place a unit, replacing any unit already there
    pub fn place_unit(&mut self, vector: Vector, unit: Unit) {
        if self.contains(vector) {
            self.units.insert(vector, unit);
            self.touch();
        }
    }

    pub fn remove_unit(&mut self, vector: Vector) -> Option<Unit> {
        let removed = self.units.remove(&vector);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn building_at(&self, vector: Vector) -> Option<&Building> {
        self.buildings.get(&vector)
    }

    pub fn buildings(&self) -> impl Iterator<Item = (Vector, &Building)> + '_ {
        self.buildings.iter().map(|(vector, building)| (*vector, building))
    }

    pub fn place_building(&mut self, vector: Vector, building: Building) {
        if self.contains(vector) {
            self.buildings.insert(vector, building);
            self.touch();
        }
    }

    /// Add a player, replacing one with the same id
    pub fn add_player(&mut self, player: Player) {
        self.players.retain(|existing| existing.id != player.id);
        self.players.push(player);
        self.players.sort_by_key(|player| player.id);
        self.touch();
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> + '_ {
        self.touch();
        self.players.iter_mut()
    }

    /// Team of a registered player
    ///
    /// The neutral player and unregistered players have no team; they only
    /// ever match themselves.
    pub fn team_of(&self, player: PlayerId) -> Option<TeamId> {
        if player.is_neutral() {
            return None;
        }
        self.player(player).map(|player| player.team)
    }

    pub fn matches_player(&self, a: PlayerId, b: PlayerId) -> bool {
        a == b
    }

    pub fn matches_team(&self, a: PlayerId, b: PlayerId) -> bool {
        if a == b {
            return true;
        }
        match (self.team_of(a), self.team_of(b)) {
            (Some(team_a), Some(team_b)) => team_a == team_b,
            _ => false,
        }
    }

    pub fn is_opponent(&self, a: PlayerId, b: PlayerId) -> bool {
        !self.matches_team(a, b)
    }

    pub fn is_neutral(&self, player: PlayerId) -> bool {
        player.is_neutral()
    }

    /// Movement radius of a unit including its owner's skills
    pub fn movement_radius(&self, unit: &Unit) -> i32 {
        let bonus = self
            .player(unit.player)
            .map(|player| player.movement_bonus())
            .unwrap_or(0);
        unit.kind.properties().movement_radius + bonus
    }

    /// Do both boards describe the same position, ignoring versions?
    pub fn same_layout(&self, other: &Board) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.tiles == other.tiles
            && self.units == other.units
            && self.buildings == other.buildings
            && self.players == other.players
            && self.fog == other.fog
    }

    fn touch(&mut self) {
        self.version = BoardVersion::next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::unit_type::UnitKind;
    use crate::board::vector::vec2;

    #[test]
    fn test_board_creation() {
        let board = Board::new(10, 8);
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 8);
        assert_eq!(board.vectors().count(), 80);
    }

    #[test]
    fn test_bounds_are_one_based() {
        let board = Board::new(5, 5);
        assert!(board.contains(vec2(1, 1)));
        assert!(board.contains(vec2(5, 5)));
        assert!(!board.contains(vec2(0, 1)));
        assert!(!board.contains(vec2(6, 5)));
    }

    #[test]
    fn test_out_of_bounds_lookup_is_error() {
        let board = Board::new(5, 5);
        assert!(board.get_tile(vec2(9, 9)).is_none());
        assert!(matches!(
            board.try_tile(vec2(9, 9)),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    #[test]
    #[should_panic]
    fn test_strict_tile_panics_off_board() {
        Board::new(5, 5).tile(vec2(0, 0));
    }

    #[test]
    fn test_mutation_bumps_version() {
        let board = Board::new(5, 5);
        let mut clone = board.clone();
        assert_eq!(board.version(), clone.version());

        clone.set_tile(vec2(2, 2), Tile::Forest);
        assert!(clone.version() > board.version());
        assert!(!clone.same_layout(&board));
    }

    #[test]
    fn test_unknown_players_are_opponents() {
        let mut board = Board::new(5, 5);
        board.add_player(Player::new(PlayerId::new(1), TeamId::new(1)));
        board.add_player(Player::new(PlayerId::new(2), TeamId::new(1)));

        assert!(board.matches_team(PlayerId::new(1), PlayerId::new(2)));
        assert!(!board.is_opponent(PlayerId::new(1), PlayerId::new(2)));
        assert!(board.is_opponent(PlayerId::new(1), PlayerId::new(3)));
        assert!(board.is_opponent(PlayerId::new(1), PlayerId::NEUTRAL));
    }

    #[test]
    fn test_teamless_players_never_join_a_team() {
        let mut board = Board::new(5, 5);
        board.add_player(Player::new(PlayerId::new(1), TeamId::new(2)));
        board.add_player(Player::new(PlayerId::NEUTRAL, TeamId::new(0)));
        board.add_player(Player::new(PlayerId::new(3), TeamId::new(0)));

        // Unregistered player 2 shares an id with team 2 but not the team.
        assert_eq!(board.team_of(PlayerId::new(2)), None);
        assert!(board.is_opponent(PlayerId::new(1), PlayerId::new(2)));
        assert!(board.matches_team(PlayerId::new(2), PlayerId::new(2)));

        // Neutral stays teamless even when registered with team 0.
        assert_eq!(board.team_of(PlayerId::NEUTRAL), None);
        assert!(board.is_opponent(PlayerId::new(3), PlayerId::NEUTRAL));
        assert!(!board.is_opponent(PlayerId::NEUTRAL, PlayerId::NEUTRAL));
    }

    #[test]
    fn test_place_unit_off_board_is_ignored() {
        let mut board = Board::new(3, 3);
        board.place_unit(vec2(4, 4), Unit::new(UnitKind::Tank, PlayerId::new(1)));
        assert_eq!(board.units().count(), 0);
    }
}
