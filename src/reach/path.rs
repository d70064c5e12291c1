//! Path reconstruction from search results
//!
//! Turns predecessor chains back into ordered paths, stops paths at units the
//! mover cannot see, and picks staging vectors for units that fire from a
//! distance.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Unit, Vector};
use crate::reach::search::{SearchFields, SearchItem};
use crate::vision::Vision;

/// Ordered path from just after the origin up to the destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementPath {
    pub path: Vec<Vector>,
    /// Hidden unit the path ran into; the path stops right before it
    pub blocked_by: Option<Vector>,
}

/// Items of `fields` for each vector of `path`, skipping unknown vectors
pub fn get_path_fields(path: &[Vector], fields: &SearchFields) -> Vec<SearchItem> {
    path.iter()
        .filter_map(|vector| fields.get(vector).copied())
        .collect()
}

/// Walk parents back from `destination` and return the path in travel order
///
/// The origin (the item without a parent) is not part of the path. With a
/// `vision`, the path is cut at the first vector holding a unit that vision
/// cannot see.
pub fn get_movement_path(
    board: &Board,
    destination: Vector,
    fields: &SearchFields,
    vision: Option<&dyn Vision>,
) -> MovementPath {
    let mut path = Vec::new();
    let mut seen: AHashSet<Vector> = AHashSet::new();
    let mut current = fields.get(&destination);

    while let Some(item) = current {
        if item.parent.is_none() {
            break;
        }
        if !seen.insert(item.vector) {
            tracing::warn!("cycle in parent chain at {} towards {}", item.vector, destination);
            break;
        }
        path.push(item.vector);
        current = item.parent.and_then(|parent| fields.get(&parent));
    }
    path.reverse();

    match vision {
        Some(vision) => follow_movement_path(board, &path, vision),
        None => MovementPath {
            path,
            blocked_by: None,
        },
    }
}

/// Cut an ordered path at the first unit `vision` cannot see
pub fn follow_movement_path(board: &Board, path: &[Vector], vision: &dyn Vision) -> MovementPath {
    for (index, vector) in path.iter().enumerate() {
        if board.unit_at(*vector).is_some() && !vision.is_visible(board, *vector) {
            return MovementPath {
                path: path[..index].to_vec(),
                blocked_by: Some(*vector),
            };
        }
    }

    MovementPath {
        path: path.to_vec(),
        blocked_by: None,
    }
}

/// Staging vector a unit should move to before attacking `target`
///
/// `fields` is a search from `origin` that reaches `target` (usually run with
/// [`crate::reach::strategy::NoObstruction`]). Stays on `origin` when the
/// target is already in range. Otherwise looks at up to three ancestors of
/// the target and takes the one furthest back that is free (or the origin)
/// and still within range, falling back to the nearest free ancestor.
pub fn get_parent_to_move_to(
    board: &Board,
    unit: &Unit,
    origin: Vector,
    target: Vector,
    fields: &SearchFields,
) -> Option<Vector> {
    let (min, max) = unit.kind.attack_band()?;
    let distance = origin.distance(target);
    if distance >= min && distance <= max {
        return Some(origin);
    }

    let mut ancestors = Vec::with_capacity(3);
    let mut seen: AHashSet<Vector> = AHashSet::new();
    let mut parent = fields.get(&target).and_then(|item| item.parent);
    while let Some(vector) = parent {
        if ancestors.len() == 3 || !seen.insert(vector) {
            break;
        }
        ancestors.push(vector);
        parent = fields.get(&vector).and_then(|item| item.parent);
    }

    let is_free = |vector: Vector| vector == origin || board.unit_at(vector).is_none();

    ancestors
        .iter()
        .rev()
        .find(|vector| is_free(**vector) && vector.distance(target) <= max)
        .or_else(|| ancestors.iter().find(|vector| is_free(**vector)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{vec2, Player, UnitKind};
    use crate::core::types::{PlayerId, TeamId};
    use crate::reach::query::moveable;
    use crate::reach::strategy::NoObstruction;
    use crate::vision::{Fog, Unrestricted};

    fn board_with_players() -> Board {
        let mut board = Board::new(9, 9);
        board.add_player(Player::new(PlayerId::new(1), TeamId::new(1)));
        board.add_player(Player::new(PlayerId::new(2), TeamId::new(2)));
        board
    }

    fn line_fields() -> SearchFields {
        let mut fields = SearchFields::default();
        fields.insert(vec2(2, 1), SearchItem::new(vec2(2, 1), 1, Some(vec2(1, 1))));
        fields.insert(vec2(3, 1), SearchItem::new(vec2(3, 1), 2, Some(vec2(2, 1))));
        fields.insert(vec2(4, 1), SearchItem::new(vec2(4, 1), 3, Some(vec2(3, 1))));
        fields
    }

    #[test]
    fn test_path_fields_skip_unknown() {
        let fields = line_fields();
        let items = get_path_fields(&[vec2(2, 1), vec2(9, 9), vec2(4, 1)], &fields);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].cost, 3);
    }

    #[test]
    fn test_movement_path_in_travel_order() {
        let board = board_with_players();
        let result = get_movement_path(&board, vec2(4, 1), &line_fields(), None);
        assert_eq!(result.path, vec![vec2(2, 1), vec2(3, 1), vec2(4, 1)]);
        assert_eq!(result.blocked_by, None);
    }

    #[test]
    fn test_movement_path_excludes_origin_item() {
        let board = board_with_players();
        let unit = Unit::new(UnitKind::Infantry, PlayerId::new(1));
        let fields = moveable(&board, &unit, vec2(1, 1), None, None, true);

        let result = get_movement_path(&board, vec2(1, 3), &fields, None);
        assert_eq!(result.path.len(), 2);
        assert_eq!(result.path.last(), Some(&vec2(1, 3)));
        assert!(get_movement_path(&board, vec2(1, 1), &fields, None).path.is_empty());
    }

    #[test]
    fn test_movement_path_survives_cycles() {
        let board = board_with_players();
        let mut fields = SearchFields::default();
        fields.insert(vec2(2, 1), SearchItem::new(vec2(2, 1), 1, Some(vec2(3, 1))));
        fields.insert(vec2(3, 1), SearchItem::new(vec2(3, 1), 1, Some(vec2(2, 1))));

        let result = get_movement_path(&board, vec2(3, 1), &fields, None);
        assert_eq!(result.path, vec![vec2(2, 1), vec2(3, 1)]);
    }

    #[test]
    fn test_unknown_destination_gives_empty_path() {
        let board = board_with_players();
        let result = get_movement_path(&board, vec2(8, 8), &line_fields(), None);
        assert!(result.path.is_empty());
    }

    #[test]
    fn test_hidden_unit_blocks_path() {
        let mut board = board_with_players();
        board.set_fog(true);
        board.place_unit(vec2(1, 1), Unit::new(UnitKind::Infantry, PlayerId::new(1)));
        // Infantry sees 2 steps; (4,1) is 3 away.
        board.place_unit(vec2(4, 1), Unit::new(UnitKind::Tank, PlayerId::new(2)));

        let fog = Fog::new(PlayerId::new(1));
        let path = [vec2(2, 1), vec2(3, 1), vec2(4, 1), vec2(5, 1)];
        let result = follow_movement_path(&board, &path, &fog);
        assert_eq!(result.path, vec![vec2(2, 1), vec2(3, 1)]);
        assert_eq!(result.blocked_by, Some(vec2(4, 1)));

        let open = follow_movement_path(&board, &path, &Unrestricted::new(PlayerId::new(1)));
        assert_eq!(open.path.len(), 4);
        assert_eq!(open.blocked_by, None);
    }

    #[test]
    fn test_parent_stays_when_in_range() {
        let board = board_with_players();
        let sniper = Unit::new(UnitKind::Sniper, PlayerId::new(1));
        let fields = SearchFields::default();
        let parent = get_parent_to_move_to(&board, &sniper, vec2(5, 5), vec2(5, 3), &fields);
        assert_eq!(parent, Some(vec2(5, 5)));
    }

    #[test]
    fn test_parent_walks_back_within_reach() {
        let board = board_with_players();
        let sniper = Unit::new(UnitKind::Sniper, PlayerId::new(1));
        let origin = vec2(5, 8);
        let target = vec2(5, 2);
        let fields = moveable(&board, &sniper, origin, Some(6), Some(&NoObstruction), false);

        // Ancestors of the target: (5,3), (5,4), (5,5); reach 2 allows (5,4).
        let parent = get_parent_to_move_to(&board, &sniper, origin, target, &fields);
        assert_eq!(parent, Some(vec2(5, 4)));
    }

    #[test]
    fn test_parent_skips_occupied_ancestors() {
        let mut board = board_with_players();
        board.place_unit(vec2(5, 4), Unit::new(UnitKind::Tank, PlayerId::new(1)));
        let sniper = Unit::new(UnitKind::Sniper, PlayerId::new(1));
        let origin = vec2(5, 8);
        let target = vec2(5, 2);
        let fields = moveable(&board, &sniper, origin, Some(6), Some(&NoObstruction), false);

        let parent = get_parent_to_move_to(&board, &sniper, origin, target, &fields);
        assert_eq!(parent, Some(vec2(5, 3)));
    }

    #[test]
    fn test_artillery_stages_at_max_range() {
        let board = board_with_players();
        let artillery = Unit::new(UnitKind::Artillery, PlayerId::new(1));
        let origin = vec2(5, 8);
        let target = vec2(5, 2);
        let fields = moveable(&board, &artillery, origin, Some(6), Some(&NoObstruction), false);

        let parent = get_parent_to_move_to(&board, &artillery, origin, target, &fields);
        assert_eq!(parent, Some(vec2(5, 5)));
    }

    #[test]
    fn test_unarmed_unit_has_no_parent() {
        let board = board_with_players();
        let pioneer = Unit::new(UnitKind::Pioneer, PlayerId::new(1));
        let parent = get_parent_to_move_to(&board, &pioneer, vec2(1, 1), vec2(2, 1), &line_fields());
        assert_eq!(parent, None);
    }
}
