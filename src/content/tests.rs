//! Content domain: tests for parsing and validating actor definitions.

use std::time::Duration;

use bevy::prelude::*;

use super::{ActorsFile, EnemyDef, GroundCheckDef, PlayerDef, parse_actors, validate_enemy, validate_player};
use crate::movement::ColliderTag;

fn enemy_def() -> EnemyDef {
    EnemyDef {
        id: "enemy_test".to_string(),
        position: (0.0, 0.0),
        size: (0.8, 0.8),
        waypoints: Some(((-2.0, 0.0), (2.0, 0.0))),
        speed: 2.0,
        ground_check: Some(GroundCheckDef {
            offset: (0.5, -0.5),
            radius: 0.2,
            tag: ColliderTag::Ground,
        }),
        sound_interval: 3.0,
        proximity_radius: 1.5,
    }
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_applies_defaults() {
    let source = r#"(
        schema_version: 1,
        player: (position: (1.0, 2.0)),
        enemies: [
            (
                id: "e1",
                position: (0.0, 0.0),
                waypoints: ((0.0, 0.0), (3.0, 0.0)),
                ground_check: (offset: (0.5, -0.5)),
            ),
        ],
    )"#;

    let actors = parse_actors(source, "inline").unwrap();
    assert_eq!(actors.player.position, (1.0, 2.0));
    assert_eq!(actors.player.move_speed, 5.0);
    assert_eq!(actors.player.jump_impulse, 15.0);
    assert_eq!(actors.player.respawn_delay, 2.0);

    let enemy = &actors.enemies[0];
    assert_eq!(enemy.speed, 2.0);
    assert_eq!(enemy.sound_interval, 3.0);
    let check = enemy.ground_check.as_ref().unwrap();
    assert_eq!(check.radius, 0.2);
    assert_eq!(check.tag, ColliderTag::Ground);
    assert!(actors.platforms.is_empty());
    assert!(actors.sounds.jump.is_none());
}

#[test]
fn test_parse_missing_waypoints_is_none() {
    let source = r#"(
        schema_version: 1,
        player: (position: (0.0, 0.0)),
        enemies: [(id: "lost", position: (0.0, 0.0))],
    )"#;

    let actors = parse_actors(source, "inline").unwrap();
    assert!(actors.enemies[0].waypoints.is_none());
    assert!(actors.enemies[0].ground_check.is_none());
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_actors("(schema_version: ", "broken.ron").unwrap_err();
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_shipped_actor_file_parses_and_validates() {
    let source = include_str!("../../assets/data/actors.ron");
    let actors = parse_actors(source, "actors.ron").unwrap();

    assert!(validate_player(&actors.player).is_ok());
    for enemy in &actors.enemies {
        assert!(validate_enemy(enemy).is_ok(), "enemy {} should validate", enemy.id);
    }
}

#[test]
fn test_builtin_level_validates() {
    let actors = ActorsFile::default();
    assert!(validate_player(&actors.player).is_ok());
    assert!(actors.enemies.iter().all(|e| validate_enemy(e).is_ok()));
}

// -----------------------------------------------------------------------------
// Player validation
// -----------------------------------------------------------------------------

#[test]
fn test_validate_player_builds_tuning() {
    let blueprint = validate_player(&PlayerDef::default()).unwrap();
    assert_eq!(blueprint.tuning.move_speed, 5.0);
    assert_eq!(blueprint.tuning.jump_impulse, 15.0);
    assert_eq!(blueprint.tuning.respawn_delay, Duration::from_secs(2));
    assert_eq!(blueprint.size, Vec2::new(0.8, 1.0));
}

#[test]
fn test_validate_player_rejects_bad_numbers() {
    let def = PlayerDef {
        move_speed: 0.0,
        jump_impulse: f32::NAN,
        respawn_delay: -1.0,
        ..PlayerDef::default()
    };

    let errors = validate_player(&def).unwrap_err();
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["move_speed", "jump_impulse", "respawn_delay"]);
}

#[test]
fn test_validate_player_rejects_out_of_range_respawn_delay() {
    for respawn_delay in [1e20, f32::INFINITY] {
        let def = PlayerDef {
            respawn_delay,
            ..PlayerDef::default()
        };

        let errors = validate_player(&def).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "respawn_delay");
    }
}

#[test]
fn test_validate_player_allows_zero_respawn_delay() {
    let def = PlayerDef {
        respawn_delay: 0.0,
        ..PlayerDef::default()
    };
    assert!(validate_player(&def).is_ok());
}

// -----------------------------------------------------------------------------
// Enemy validation
// -----------------------------------------------------------------------------

#[test]
fn test_validate_enemy_resolves_references() {
    let blueprint = validate_enemy(&enemy_def()).unwrap();
    assert_eq!(blueprint.waypoints, (Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0)));
    assert_eq!(blueprint.ground_check.offset, Vec2::new(0.5, -0.5));
    assert_eq!(blueprint.ground_check.tag, ColliderTag::Ground);
    assert_eq!(blueprint.tuning.speed, 2.0);
    assert_eq!(blueprint.tuning.sound_interval, 3.0);
}

#[test]
fn test_validate_enemy_rejects_missing_waypoints() {
    let def = EnemyDef {
        waypoints: None,
        ..enemy_def()
    };

    let errors = validate_enemy(&def).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "waypoints");
    assert_eq!(errors[0].actor, "Enemy 'enemy_test'");
}

#[test]
fn test_validate_enemy_rejects_missing_ground_check() {
    let def = EnemyDef {
        ground_check: None,
        ..enemy_def()
    };

    let errors = validate_enemy(&def).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "ground_check");
}

#[test]
fn test_validate_enemy_rejects_identical_waypoints() {
    let def = EnemyDef {
        waypoints: Some(((1.0, 1.0), (1.0, 1.0))),
        ..enemy_def()
    };

    let errors = validate_enemy(&def).unwrap_err();
    assert_eq!(errors[0].field, "waypoints");
}

#[test]
fn test_validate_enemy_collects_every_error() {
    let def = EnemyDef {
        waypoints: None,
        ground_check: None,
        speed: -2.0,
        sound_interval: 0.0,
        ..enemy_def()
    };

    let errors = validate_enemy(&def).unwrap_err();
    assert_eq!(errors.len(), 4);
}
