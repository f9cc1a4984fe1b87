//! Patrol domain: enemy spawning from actor data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ActorRoster, EnemyBlueprint, report_rejected, validate_enemy};
use crate::movement::{ColliderTag, GameLayer};
use crate::patrol::{Enemy, EnemyPatrol, ProximitySensor};
use crate::sprites::Animator;

pub(crate) fn spawn_enemies(mut commands: Commands, roster: Res<ActorRoster>) {
    for def in &roster.0.enemies {
        match validate_enemy(def) {
            Ok(blueprint) => spawn_enemy(&mut commands, blueprint),
            Err(errors) => report_rejected(&errors),
        }
    }
}

fn spawn_enemy(commands: &mut Commands, blueprint: EnemyBlueprint) {
    let (point_a, point_b) = blueprint.waypoints;

    info!(
        "Spawning enemy '{}' patrolling {:?} -> {:?} at speed {}",
        blueprint.id, point_a, point_b, blueprint.tuning.speed
    );

    commands
        .spawn((
            // Identity & Patrol
            (
                Enemy,
                ColliderTag::Enemy,
                EnemyPatrol::new(point_a, point_b, blueprint.tuning.sound_interval),
                blueprint.tuning,
                blueprint.ground_check,
                Animator::running(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.8, 0.25, 0.25),
                custom_size: Some(blueprint.size),
                ..default()
            },
            Transform::from_translation(blueprint.position.extend(1.0)),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(blueprint.size.x, blueprint.size.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Player]),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                ProximitySensor,
                Transform::default(),
                Collider::circle(blueprint.proximity_radius),
                Sensor,
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
            ));
        });
}
