//! Movement domain: player bootstrap from actor data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{ActorRoster, report_rejected, validate_player};
use crate::movement::{ColliderTag, GameLayer, Player, PlayerLocomotion};
use crate::sprites::Animator;

pub(crate) fn spawn_player(mut commands: Commands, roster: Res<ActorRoster>) {
    let blueprint = match validate_player(&roster.0.player) {
        Ok(blueprint) => blueprint,
        Err(errors) => {
            report_rejected(&errors);
            return;
        }
    };

    info!(
        "Spawning player at {:?}: move_speed={}, jump_impulse={}, respawn_delay={:?}",
        blueprint.position,
        blueprint.tuning.move_speed,
        blueprint.tuning.jump_impulse,
        blueprint.tuning.respawn_delay
    );

    commands.spawn((
        // Identity & Movement
        (
            Player,
            ColliderTag::Player,
            PlayerLocomotion::default(),
            blueprint.tuning,
            Animator::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
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
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Enemy, GameLayer::Sensor],
            ),
        ),
    ));
}
