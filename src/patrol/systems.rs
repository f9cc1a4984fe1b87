//! Patrol domain: enemy patrol and proximity systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{LifecycleNotifier, SoundCue};
use crate::movement::{ColliderTag, Faces, GroundSensor};
use crate::patrol::{
    Enemy, EnemyPatrol, GroundCheck, PatrolTuning, ProximitySensor, TurnReason, proximity_owner,
};

pub(crate) fn update_patrols(
    time: Res<Time>,
    sensor: GroundSensor,
    mut notifier: LifecycleNotifier,
    mut query: Query<
        (
            Entity,
            &Transform,
            &PatrolTuning,
            &GroundCheck,
            &mut EnemyPatrol,
            &mut LinearVelocity,
        ),
        With<Enemy>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, transform, tuning, check, mut patrol, mut velocity) in &mut query {
        let position = transform.translation.truncate();
        let probe = check.point(position, patrol.facing());
        let ground_ahead = sensor.detects(probe, check.radius, check.tag, entity);

        let step = patrol.tick(dt, position, ground_ahead, tuning.speed);

        if step.periodic_sound {
            notifier.play_once(entity, SoundCue::Monster);
        }

        // Only apply horizontal movement velocity, let physics handle the rest
        if let Some(vx) = step.velocity_x {
            velocity.x = vx;
        }

        match step.turned {
            Some(TurnReason::Ledge) => {
                debug!("Enemy {:?} turned at ledge, now {:?}", entity, patrol.leg());
            }
            Some(TurnReason::Waypoint) => {
                debug!("Enemy {:?} reached waypoint, now {:?}", entity, patrol.leg());
            }
            None => {}
        }
    }
}

/// Plays the monster sound when the player enters an enemy's proximity
/// sensor, independent of the periodic timer.
pub(crate) fn detect_player_proximity(
    mut notifier: LifecycleNotifier,
    mut collision_start_events: MessageReader<CollisionStart>,
    sensors: Query<&ChildOf, With<ProximitySensor>>,
    tags: Query<&ColliderTag>,
) {
    for event in collision_start_events.read() {
        let owner = proximity_owner(
            (event.collider1, event.collider2),
            |entity| sensors.get(entity).ok().map(ChildOf::parent),
            |entity| tags.get(entity).ok().copied(),
        );
        let Some(enemy) = owner else {
            continue;
        };

        debug!("Player entered proximity of {:?}", enemy);
        notifier.play_once(enemy, SoundCue::Monster);
    }
}
