//! Validation of actor definitions before they are spawned.
//!
//! Each check turns a loose definition into a blueprint with every
//! reference resolved, so systems never re-check configuration per tick.

use std::time::Duration;

use bevy::prelude::*;

use super::data::{EnemyDef, Pair, PlayerDef};
use crate::movement::PlayerTuning;
use crate::patrol::{GroundCheck, PatrolTuning};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub actor: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field '{}': {}", self.actor, self.field, self.problem)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone)]
pub struct PlayerBlueprint {
    pub position: Vec2,
    pub size: Vec2,
    pub tuning: PlayerTuning,
}

#[derive(Debug, Clone)]
pub struct EnemyBlueprint {
    pub id: String,
    pub position: Vec2,
    pub size: Vec2,
    pub waypoints: (Vec2, Vec2),
    pub tuning: PatrolTuning,
    pub ground_check: GroundCheck,
    pub proximity_radius: f32,
}

fn vec(pair: Pair) -> Vec2 {
    Vec2::new(pair.0, pair.1)
}

/// Helper macro for checking a value is finite and strictly positive
macro_rules! check_positive {
    ($errors:expr, $actor:expr, $field:expr, $value:expr) => {
        if !($value.is_finite() && $value > 0.0) {
            $errors.push(ValidationError {
                actor: $actor.to_string(),
                field: $field,
                problem: format!("must be a positive number, got {}", $value),
            });
        }
    };
}

macro_rules! check_size {
    ($errors:expr, $actor:expr, $size:expr) => {
        check_positive!($errors, $actor, "size.x", $size.0);
        check_positive!($errors, $actor, "size.y", $size.1);
    };
}

pub fn validate_player(def: &PlayerDef) -> Result<PlayerBlueprint, Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_size!(errors, "Player", def.size);
    check_positive!(errors, "Player", "move_speed", def.move_speed);
    check_positive!(errors, "Player", "jump_impulse", def.jump_impulse);
    // Rejects negative, NaN and out-of-range delays alike.
    let respawn_delay = match Duration::try_from_secs_f32(def.respawn_delay) {
        Ok(delay) => delay,
        Err(_) => {
            errors.push(ValidationError {
                actor: "Player".to_string(),
                field: "respawn_delay",
                problem: format!("must be zero or more seconds, got {}", def.respawn_delay),
            });
            Duration::ZERO
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PlayerBlueprint {
        position: vec(def.position),
        size: vec(def.size),
        tuning: PlayerTuning {
            move_speed: def.move_speed,
            jump_impulse: def.jump_impulse,
            respawn_delay,
        },
    })
}

pub fn validate_enemy(def: &EnemyDef) -> Result<EnemyBlueprint, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let actor = format!("Enemy '{}'", def.id);

    check_size!(errors, actor, def.size);
    check_positive!(errors, actor, "speed", def.speed);
    check_positive!(errors, actor, "sound_interval", def.sound_interval);
    check_positive!(errors, actor, "proximity_radius", def.proximity_radius);

    let waypoints = match def.waypoints {
        Some((a, b)) if a == b => {
            errors.push(ValidationError {
                actor: actor.clone(),
                field: "waypoints",
                problem: "waypoints A and B are the same point".to_string(),
            });
            None
        }
        Some((a, b)) => Some((vec(a), vec(b))),
        None => {
            errors.push(ValidationError {
                actor: actor.clone(),
                field: "waypoints",
                problem: "patrol needs two waypoints".to_string(),
            });
            None
        }
    };

    let ground_check = match &def.ground_check {
        Some(check) => {
            check_positive!(errors, actor, "ground_check.radius", check.radius);
            Some(GroundCheck {
                offset: vec(check.offset),
                radius: check.radius,
                tag: check.tag,
            })
        }
        None => {
            errors.push(ValidationError {
                actor: actor.clone(),
                field: "ground_check",
                problem: "patrol needs a ground check point".to_string(),
            });
            None
        }
    };

    match (waypoints, ground_check) {
        (Some(waypoints), Some(ground_check)) if errors.is_empty() => Ok(EnemyBlueprint {
            id: def.id.clone(),
            position: vec(def.position),
            size: vec(def.size),
            waypoints,
            tuning: PatrolTuning {
                speed: def.speed,
                sound_interval: def.sound_interval,
            },
            ground_check,
            proximity_radius: def.proximity_radius,
        }),
        _ => Err(errors),
    }
}
