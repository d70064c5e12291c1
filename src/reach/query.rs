//! Movement range, path pricing and sight range queries

use ahash::AHashSet;

use crate::board::{Board, Skill, Unit, Vector};
use crate::core::config::config;
use crate::reach::search::{reachable, SearchFields, SearchItem};
use crate::reach::strategy::{CostStrategy, Movement, VisionCost};

/// Every vector `unit` standing on `origin` can move to
///
/// `radius` defaults to the unit's movement radius for its owner and
/// `strategy` to regular [`Movement`]. With `include_origin` the origin is
/// added at cost 0 so a unit can "move" to where it already stands.
pub fn moveable(
    board: &Board,
    unit: &Unit,
    origin: Vector,
    radius: Option<i32>,
    strategy: Option<&dyn CostStrategy>,
    include_origin: bool,
) -> SearchFields {
    let radius = radius.unwrap_or_else(|| board.movement_radius(unit));
    let default_strategy;
    let strategy = match strategy {
        Some(strategy) => strategy,
        None => {
            default_strategy = Movement::new();
            &default_strategy as &dyn CostStrategy
        }
    };

    let mut fields = reachable(board, unit, origin, radius, strategy);
    if include_origin {
        fields.insert(origin, SearchItem::origin(origin));
    }
    fields
}

/// Price an explicit path from `start`, or -1 if it cannot be travelled
///
/// `path` excludes `start`. A path is rejected when it revisits a vector,
/// takes a non-adjacent step, leaves the board, enters an impassable or
/// inaccessible tile, exceeds the radius or the resource ceiling, or ends on
/// a unit that cannot take the mover aboard.
pub fn get_path_cost(
    board: &Board,
    unit: &Unit,
    start: Vector,
    path: &[Vector],
    radius: Option<i32>,
    strategy: Option<&dyn CostStrategy>,
) -> i32 {
    let radius = radius.unwrap_or_else(|| board.movement_radius(unit));
    let default_strategy;
    let strategy = match strategy {
        Some(strategy) => strategy,
        None => {
            default_strategy = Movement::new();
            &default_strategy as &dyn CostStrategy
        }
    };
    let ceiling = strategy.resource_ceiling(unit);

    let mut seen: AHashSet<Vector> = AHashSet::new();
    seen.insert(start);
    let mut previous = start;
    let mut total = 0;

    for &vector in path {
        if !seen.insert(vector) || previous.distance(vector) != 1 || !board.contains(vector) {
            return -1;
        }

        let step_cost = strategy.tile_cost(board, unit, vector);
        if step_cost < 0 || !strategy.is_accessible(board, unit, vector) {
            return -1;
        }

        let Some(previous_tile) = board.get_tile(previous) else {
            return -1;
        };
        total += step_cost + strategy.transition_cost(unit.kind, previous_tile, board.tile(vector));
        if total > radius || total > ceiling {
            return -1;
        }

        previous = vector;
    }

    if let Some(other) = path.last().and_then(|last| board.unit_at(*last)) {
        if !board.matches_player(other.player, unit.player) || !other.can_load(unit) {
            return -1;
        }
    }

    total
}

/// Extra sight radius from stance and terrain
pub fn vision_bonus(board: &Board, unit: &Unit, origin: Vector) -> i32 {
    let config = config();
    if unit.unfolded {
        config.unfolded_vision_bonus
    } else if unit.kind.is_foot_soldier()
        && board.get_tile(origin).is_some_and(|tile| tile.is_elevated())
    {
        config.elevation_vision_bonus
    } else {
        0
    }
}

/// Every vector `unit` standing on `origin` can see
///
/// Concealing tiles farther than one step away are dropped unless the owner
/// has [`Skill::EagleEye`]. The ring around the origin is always visible.
pub fn visible(board: &Board, unit: &Unit, origin: Vector, radius: Option<i32>) -> SearchFields {
    let radius = radius
        .unwrap_or_else(|| unit.kind.vision())
        .saturating_add(vision_bonus(board, unit, origin));
    let mut fields = reachable(board, unit, origin, radius, &VisionCost);

    let eagle_eye = board
        .player(unit.player)
        .is_some_and(|player| player.has_skill(Skill::EagleEye));
    if !eagle_eye {
        fields.retain(|vector, _| {
            origin.distance(*vector) <= 1 || !board.tile(*vector).conceals()
        });
    }

    for vector in origin.within(config().always_visible_ring) {
        if board.contains(vector) {
            fields.insert(vector, SearchItem::origin(vector));
        }
    }

    fields
}
