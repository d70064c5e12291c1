//! Reach, attack and fog integration tests

use gridreach::board::{vec2, Board, Player, Skill, Tile, Unit, UnitKind, Vector};
use gridreach::core::{PlayerId, TeamId};
use gridreach::reach::*;
use gridreach::scenario::Scenario;
use gridreach::vision::{vision_for, Fog, Vision};

fn two_player_board(width: i32, height: i32) -> Board {
    let mut board = Board::new(width, height);
    board.add_player(Player::new(PlayerId::new(1), TeamId::new(1)));
    board.add_player(Player::new(PlayerId::new(2), TeamId::new(2)));
    board
}

#[test]
fn test_open_board_diamond() {
    let board = two_player_board(5, 5);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1));
    let origin = vec2(3, 3);

    let fields = moveable(&board, &infantry, origin, None, None, true);

    // Radius-3 diamond around (3,3) clipped to the board: all but the corners.
    let expected: Vec<Vector> = vec![
        vec2(2, 1),
        vec2(3, 1),
        vec2(4, 1),
        vec2(1, 2),
        vec2(2, 2),
        vec2(3, 2),
        vec2(4, 2),
        vec2(5, 2),
        vec2(1, 3),
        vec2(2, 3),
        vec2(3, 3),
        vec2(4, 3),
        vec2(5, 3),
        vec2(1, 4),
        vec2(2, 4),
        vec2(3, 4),
        vec2(4, 4),
        vec2(5, 4),
        vec2(2, 5),
        vec2(3, 5),
        vec2(4, 5),
    ];
    assert_eq!(fields.len(), expected.len());
    for vector in &expected {
        let item = fields[vector];
        assert_eq!(item.cost, origin.distance(*vector));
    }
    assert_eq!(fields[&origin].parent, None);

    let without_origin = moveable(&board, &infantry, origin, None, None, false);
    assert_eq!(without_origin.len(), expected.len() - 1);
}

#[test]
fn test_path_cost_reproduces_search_cost() {
    let mut board = two_player_board(8, 8);
    board.set_tile(vec2(4, 4), Tile::Mountain);
    board.set_tile(vec2(5, 3), Tile::Forest);
    board.set_tile(vec2(3, 5), Tile::Sea);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1));
    let origin = vec2(4, 5);

    let fields = moveable(&board, &infantry, origin, None, None, false);
    assert!(!fields.is_empty());
    for (vector, item) in &fields {
        let path = get_movement_path(&board, *vector, &fields, None).path;
        assert_eq!(path.last(), Some(vector));
        assert_eq!(get_path_cost(&board, &infantry, origin, &path, None, None), item.cost);

        let steps = get_path_fields(&path, &fields);
        assert_eq!(steps.len(), path.len());
        assert_eq!(steps.last().map(|step| step.cost), Some(item.cost));
    }
}

#[test]
fn test_revisiting_path_costs_minus_one() {
    let board = two_player_board(5, 5);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1));
    let path = [vec2(3, 2), vec2(3, 3), vec2(3, 2)];

    assert_eq!(get_path_cost(&board, &infantry, vec2(3, 3), &path, Some(10), None), -1);
    assert_eq!(get_path_cost(&board, &infantry, vec2(3, 3), &[], None, None), 0);
}

#[test]
fn test_exhausted_unit_in_corner_attacks_nothing() {
    let board = two_player_board(5, 5);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1)).complete();

    let fields = attackable(&board, &infantry, vec2(1, 1), Optimize::Cost, None);
    assert!(fields.is_empty());
}

const FOGGY_LANE: &str = r#"
fog = true
tiles = ["........."]

[[players]]
id = 1
team = 1

[[players]]
id = 2
team = 2

[[units]]
x = 1
y = 1
kind = "Infantry"
player = 1

[[units]]
x = 4
y = 1
kind = "Tank"
player = 2
"#;

#[test]
fn test_hidden_enemy_does_not_shape_attack_range() {
    let board = Scenario::from_toml(FOGGY_LANE).unwrap().to_board().unwrap();
    let infantry = board.unit_at(vec2(1, 1)).cloned().unwrap();
    let viewer = PlayerId::new(1);

    let known = attackable(&board, &infantry, vec2(1, 1), Optimize::Cost, None);
    assert!(known.contains_key(&vec2(4, 1)));
    assert!(!known.contains_key(&vec2(5, 1)));

    let vision = vision_for(&board, viewer);
    let fogged = attackable_with_vision(
        &board,
        vision.as_ref(),
        &infantry,
        vec2(1, 1),
        Optimize::Cost,
        None,
    );
    assert_eq!(fogged[&vec2(5, 1)].parent, Some(vec2(4, 1)));
}

#[test]
fn test_path_through_fog_stops_at_hidden_unit() {
    let board = Scenario::from_toml(FOGGY_LANE).unwrap().to_board().unwrap();
    let infantry = board.unit_at(vec2(1, 1)).cloned().unwrap();
    let fog = Fog::new(PlayerId::new(1));

    let redacted = fog.apply(&board);
    assert!(redacted.unit_at(vec2(4, 1)).is_none());

    let fields = moveable(&redacted, &infantry, vec2(1, 1), Some(4), None, false);
    let result = get_movement_path(&board, vec2(5, 1), &fields, Some(&fog as &dyn Vision));
    assert_eq!(result.path, vec![vec2(2, 1), vec2(3, 1)]);
    assert_eq!(result.blocked_by, Some(vec2(4, 1)));
}

#[test]
fn test_forced_march_extends_range() {
    let mut board = two_player_board(12, 1);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1));
    let before = moveable(&board, &infantry, vec2(1, 1), None, None, false);

    board.add_player(
        Player::new(PlayerId::new(1), TeamId::new(1)).with_skill(Skill::ForcedMarch),
    );
    let after = moveable(&board, &infantry, vec2(1, 1), None, None, false);
    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn test_custom_strategy_overrides_tile_cost() {
    struct Flat;

    impl CostStrategy for Flat {
        fn tile_cost(&self, _board: &Board, _unit: &Unit, _vector: Vector) -> i32 {
            1
        }
    }

    let mut board = two_player_board(6, 1);
    board.set_tile(vec2(2, 1), Tile::Mountain);
    board.set_tile(vec2(3, 1), Tile::Mountain);
    let infantry = Unit::new(UnitKind::Infantry, PlayerId::new(1));

    let regular = moveable(&board, &infantry, vec2(1, 1), None, None, false);
    let flat = moveable(&board, &infantry, vec2(1, 1), None, Some(&Flat), false);
    assert!(!regular.contains_key(&vec2(4, 1)));
    assert_eq!(flat[&vec2(4, 1)].cost, 3);
}

#[test]
fn test_staging_parent_for_sniper() {
    let board = two_player_board(9, 9);
    let sniper = Unit::new(UnitKind::Sniper, PlayerId::new(1));
    let origin = vec2(1, 5);
    let target = vec2(7, 5);

    let fields = moveable(&board, &sniper, origin, Some(6), Some(&NoObstruction), false);
    let parent = get_parent_to_move_to(&board, &sniper, origin, target, &fields);
    assert_eq!(parent, Some(vec2(5, 5)));

    let path = get_movement_path(&board, vec2(5, 5), &fields, None).path;
    assert_eq!(get_path_cost(&board, &sniper, origin, &path, Some(6), None), 4);
}
