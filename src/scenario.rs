//! Scenario files
//!
//! A scenario is a TOML description of a board: terrain rows drawn with tile
//! symbols, plus players, units and buildings. Used by the inspection binary
//! and by tests that would rather draw a map than place tiles one by one.
//!
//! ```toml
//! fog = true
//! tiles = [
//!     "..F..",
//!     ".M~~.",
//! ]
//!
//! [[players]]
//! id = 1
//! team = 1
//! skills = ["EagleEye"]
//!
//! [[units]]
//! x = 1
//! y = 1
//! kind = "Infantry"
//! player = 1
//! ```

use std::fs;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Building, BuildingKind, Player, Skill, Tile, Unit, UnitKind, Vector};
use crate::core::error::{GridError, Result};
use crate::core::types::{PlayerId, TeamId};

/// Player entry of a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioPlayer {
    pub id: PlayerId,
    pub team: TeamId,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// Unit entry of a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioUnit {
    pub x: i32,
    pub y: i32,
    pub kind: UnitKind,
    pub player: PlayerId,
    /// Defaults to the kind's full tank
    #[serde(default)]
    pub fuel: Option<i32>,
    #[serde(default)]
    pub moved: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub unfolded: bool,
}

/// Building entry of a scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioBuilding {
    pub x: i32,
    pub y: i32,
    pub kind: BuildingKind,
    #[serde(default = "neutral")]
    pub player: PlayerId,
}

fn neutral() -> PlayerId {
    PlayerId::NEUTRAL
}

/// Parsed scenario file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub fog: bool,
    /// One string per row, top to bottom, one tile symbol per column
    pub tiles: Vec<String>,
    #[serde(default)]
    pub players: Vec<ScenarioPlayer>,
    #[serde(default)]
    pub units: Vec<ScenarioUnit>,
    #[serde(default)]
    pub buildings: Vec<ScenarioBuilding>,
}

impl Scenario {
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build the board this scenario describes
    pub fn to_board(&self) -> Result<Board> {
        let height = self.tiles.len() as i32;
        let width = self.tiles.first().map_or(0, |row| row.chars().count()) as i32;
        if width == 0 || height == 0 {
            return Err(GridError::InvalidScenario("scenario has no tiles".into()));
        }

        let mut board = Board::new(width, height);
        for (row, line) in self.tiles.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(GridError::InvalidScenario(format!(
                    "row {} has {} tiles, expected {}",
                    row + 1,
                    line.chars().count(),
                    width
                )));
            }

            for (column, symbol) in line.chars().enumerate() {
                let tile = Tile::from_symbol(symbol).ok_or_else(|| {
                    GridError::InvalidScenario(format!(
                        "unknown tile symbol '{}' at {},{}",
                        symbol,
                        column + 1,
                        row + 1
                    ))
                })?;
                board.set_tile(Vector::new(column as i32 + 1, row as i32 + 1), tile);
            }
        }

        for entry in &self.players {
            let mut player = Player::new(entry.id, entry.team);
            for skill in &entry.skills {
                player = player.with_skill(*skill);
            }
            board.add_player(player);
        }

        for entry in &self.units {
            let vector = checked_vector(&board, entry.x, entry.y)?;
            let mut unit = Unit::new(entry.kind, entry.player);
            if let Some(fuel) = entry.fuel {
                unit = unit.with_fuel(fuel);
            }
            if entry.moved {
                unit = unit.moved();
            }
            if entry.completed {
                unit = unit.complete();
            }
            if entry.unfolded {
                unit = unit.unfold();
            }
            board.place_unit(vector, unit);
        }

        for entry in &self.buildings {
            let vector = checked_vector(&board, entry.x, entry.y)?;
            board.place_building(vector, Building::new(entry.kind, entry.player));
        }

        board.set_fog(self.fog);
        tracing::debug!(
            "scenario board {}x{} with {} units",
            width,
            height,
            self.units.len()
        );
        Ok(board)
    }
}

fn checked_vector(board: &Board, x: i32, y: i32) -> Result<Vector> {
    let vector = Vector::new(x, y);
    if board.contains(vector) {
        Ok(vector)
    } else {
        Err(GridError::OutOfBounds {
            vector,
            width: board.width(),
            height: board.height(),
        })
    }
}

/// Load a scenario file straight into a board
pub fn load_board(path: &Path) -> Result<Board> {
    Scenario::load(path)?.to_board()
}

/// Deterministic random terrain, mostly passable
pub fn random_board(width: i32, height: i32, seed: u64) -> Board {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut board = Board::new(width, height);

    for vector in board.vectors().collect::<Vec<_>>() {
        let tile = match rng.gen_range(0..100) {
            0..=54 => Tile::Plain,
            55..=64 => Tile::Street,
            65..=79 => Tile::Forest,
            80..=87 => Tile::Mountain,
            88..=91 => Tile::River,
            92..=95 => Tile::Sea,
            96..=97 => Tile::Beach,
            _ => Tile::Cliff,
        };
        board.set_tile(vector, tile);
    }

    board
}
