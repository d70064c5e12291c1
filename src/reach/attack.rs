//! Attack range queries
//!
//! The result maps every targetable vector to a [`SearchItem`] whose `cost`
//! is a selection weight (lower is better) and whose `parent` is the staging
//! vector the attacker would strike from.

use serde::{Deserialize, Serialize};

use crate::board::{AttackProfile, Board, Unit, Vector};
use crate::reach::search::{reachable, SearchFields, SearchItem};
use crate::reach::strategy::Movement;
use crate::vision::Vision;

/// What to minimize when picking a staging vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Optimize {
    /// Movement cost to reach the staging vector
    #[default]
    Cost,
    /// Negated cover of the staging tile
    Cover,
}

/// Every vector `unit` standing on `origin` could attack this turn
///
/// `radius` defaults to the unit's movement radius for its owner. Units that
/// cannot attack get an empty map.
pub fn attackable(
    board: &Board,
    unit: &Unit,
    origin: Vector,
    optimize_by: Optimize,
    radius: Option<i32>,
) -> SearchFields {
    attackable_on(board, board, unit, origin, optimize_by, radius)
}

/// [`attackable`] as seen through `vision`
///
/// The search runs on the redacted board. Staging vectors that turn out to
/// hold a hidden opponent on the real board lose ties against free ones.
pub fn attackable_with_vision(
    board: &Board,
    vision: &dyn Vision,
    unit: &Unit,
    origin: Vector,
    optimize_by: Optimize,
    radius: Option<i32>,
) -> SearchFields {
    let redacted = vision.apply(board);
    attackable_on(&redacted, board, unit, origin, optimize_by, radius)
}

fn attackable_on(
    known: &Board,
    live: &Board,
    unit: &Unit,
    origin: Vector,
    optimize_by: Optimize,
    radius: Option<i32>,
) -> SearchFields {
    if !unit.can_attack() {
        return SearchFields::default();
    }

    let reach = match unit.kind.attack() {
        AttackProfile::LongRange { min, max } if max > 0 => {
            return long_range_fields(known, origin, min, max);
        }
        AttackProfile::ShortRange => None,
        AttackProfile::Skirmish { reach } => Some(reach),
        _ => return SearchFields::default(),
    };

    let mut fields = SearchFields::default();
    for neighbor in origin.adjacent() {
        if known.contains(neighbor) {
            let cover = known.tile(neighbor).cover();
            fields.insert(neighbor, SearchItem::new(neighbor, cover, Some(origin)));
        }
    }

    if let Some(reach) = reach {
        let weight = match optimize_by {
            Optimize::Cost => 0,
            Optimize::Cover => -known.get_tile(origin).map_or(0, |tile| tile.cover()),
        };
        add_secondary_targets(&mut fields, known, live, unit, origin, origin, reach, weight);
    }

    if !unit.can_move() {
        return fields;
    }

    let radius = radius.unwrap_or_else(|| known.movement_radius(unit));
    let staging_fields = reachable(known, unit, origin, radius, &Movement::new());

    for (&staging, item) in &staging_fields {
        if let Some(occupant) = known.unit_at(staging) {
            if !known.is_opponent(occupant.player, unit.player) {
                continue;
            }
        }

        let weight = match optimize_by {
            Optimize::Cost => item.cost,
            Optimize::Cover => -known.tile(staging).cover(),
        };

        for target in staging.adjacent() {
            if target == origin || !known.contains(target) {
                continue;
            }

            let replaces = fields.get(&target).map_or(true, |previous| {
                target.distance(origin) > 1 && weight < previous.cost
            });
            if replaces {
                fields.insert(target, SearchItem::new(target, weight, Some(staging)));
            }
        }

        if let Some(reach) = reach {
            add_secondary_targets(&mut fields, known, live, unit, origin, staging, reach, weight);
        }
    }

    fields
}

/// Band of vectors between `min` and `max` steps away, no movement implied
fn long_range_fields(board: &Board, origin: Vector, min: i32, max: i32) -> SearchFields {
    let mut fields = SearchFields::default();
    for x in 0..=max {
        for y in 0..=(max - x) {
            let reflections = [
                Vector::new(origin.x + x, origin.y + y),
                Vector::new(origin.x - x, origin.y + y),
                Vector::new(origin.x + x, origin.y - y),
                Vector::new(origin.x - x, origin.y - y),
            ];
            for vector in reflections {
                if board.contains(vector) && origin.distance(vector) >= min {
                    fields.insert(vector, SearchItem::origin(vector));
                }
            }
        }
    }
    fields
}

/// Indirect hits from `staging`; the origin itself counts as a staging vector
fn add_secondary_targets(
    fields: &mut SearchFields,
    known: &Board,
    live: &Board,
    unit: &Unit,
    origin: Vector,
    staging: Vector,
    reach: i32,
    weight: i32,
) {
    for target in secondary_targets(staging, reach) {
        if target == origin || target == staging || !known.contains(target) {
            continue;
        }

        if prefers_secondary(live, unit, origin, fields.get(&target), staging, weight) {
            fields.insert(target, SearchItem::new(target, weight, Some(staging)));
        }
    }
}

/// Vectors a skirmisher hits from `staging` beyond its adjacent ones
fn secondary_targets(staging: Vector, reach: i32) -> Vec<Vector> {
    if reach >= 3 {
        staging.within(3)
    } else {
        staging.ring(2)
    }
}

fn prefers_secondary(
    live: &Board,
    unit: &Unit,
    origin: Vector,
    previous: Option<&SearchItem>,
    staging: Vector,
    weight: i32,
) -> bool {
    let Some(previous) = previous else {
        return true;
    };

    let is_held = |vector: Option<Vector>| {
        vector.is_some_and(|vector| {
            vector != origin
                && live
                    .unit_at(vector)
                    .is_some_and(|occupant| live.is_opponent(occupant.player, unit.player))
        })
    };

    match (is_held(previous.parent), is_held(Some(staging))) {
        (true, false) => true,
        (false, true) => false,
        _ => previous.vector.distance(origin) > 1 && weight < previous.cost,
    }
}
