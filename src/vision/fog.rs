//! Fog of war
//!
//! A team sees what its units can see plus the ring around its buildings.
//! Bitmaps are memoized per board version in a small bounded cache owned by
//! the `Fog` value, so a caller that alternates between a few boards does not
//! recompute sight for every query.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::board::{Board, PlayerStatistics, Vector};
use crate::core::config::config;
use crate::core::types::{BoardVersion, PlayerId};
use crate::reach::query::visible;
use crate::vision::{Vision, VisibilityMap};

type FogCache = IndexMap<BoardVersion, Rc<VisibilityMap>, ahash::RandomState>;

/// Fog of war for one viewer
#[derive(Debug)]
pub struct Fog {
    viewer: PlayerId,
    cache: RefCell<FogCache>,
}

impl Fog {
    pub fn new(viewer: PlayerId) -> Self {
        Self {
            viewer,
            cache: RefCell::new(FogCache::default()),
        }
    }

    /// Visibility bitmap of `board` for this viewer
    pub fn visibility_map(&self, board: &Board) -> Rc<VisibilityMap> {
        if let Some(map) = self.cache.borrow().get(&board.version()) {
            return Rc::clone(map);
        }

        let map = Rc::new(self.compute(board));
        let capacity = config().fog_cache_capacity.max(1);
        let mut cache = self.cache.borrow_mut();
        while cache.len() >= capacity {
            if let Some((evicted, _)) = cache.shift_remove_index(0) {
                tracing::debug!("fog for {:?}: evicting board version {:?}", self.viewer, evicted);
            }
        }
        cache.insert(board.version(), Rc::clone(&map));
        map
    }

    /// Drop every cached bitmap
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn cached_versions(&self) -> usize {
        self.cache.borrow().len()
    }

    fn compute(&self, board: &Board) -> VisibilityMap {
        let mut map = VisibilityMap::hidden(board);
        if self.viewer.is_neutral() {
            return map;
        }

        for (vector, unit) in board.units() {
            if board.matches_team(unit.player, self.viewer) {
                for seen in visible(board, unit, vector, None).keys() {
                    map.reveal(*seen);
                }
            }
        }

        for (vector, building) in board.buildings() {
            if board.matches_team(building.player, self.viewer) {
                for seen in vector.expand() {
                    map.reveal(seen);
                }
            }
        }

        tracing::debug!(
            "fog for {:?} on version {:?}: {} visible",
            self.viewer,
            board.version(),
            map.visible_count()
        );
        map
    }
}

impl Vision for Fog {
    fn current_viewer(&self) -> PlayerId {
        self.viewer
    }

    fn is_visible(&self, board: &Board, vector: Vector) -> bool {
        if self.viewer.is_neutral() {
            return false;
        }
        self.visibility_map(board).is_visible(vector)
    }

    fn apply(&self, board: &Board) -> Board {
        let map = self.visibility_map(board);
        let mut redacted = board.clone();

        let hidden_units: Vec<Vector> = board
            .units()
            .map(|(vector, _)| vector)
            .filter(|vector| !map.is_visible(*vector))
            .collect();
        for vector in hidden_units {
            redacted.remove_unit(vector);
        }

        let hidden_buildings: Vec<(Vector, _)> = board
            .buildings()
            .filter(|(vector, _)| !map.is_visible(*vector))
            .map(|(vector, building)| (vector, building.hide()))
            .collect();
        for (vector, building) in hidden_buildings {
            redacted.place_building(vector, building);
        }

        let team = board.team_of(self.viewer);
        for player in redacted.players_mut() {
            if team != Some(player.team) {
                player.stats = PlayerStatistics::default();
            }
        }

        redacted
    }
}
