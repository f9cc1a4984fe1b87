//! Movement domain: contact tracking for the player.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::LifecycleNotifier;
use crate::movement::systems::movement::apply_player_effects;
use crate::movement::{ColliderTag, Player, PlayerLocomotion, PlayerTuning};

/// Feeds contact enter/exit into the player's locomotion before the frame
/// step runs, so a same-frame landing can be jumped from.
pub(crate) fn track_player_contacts(
    mut commands: Commands,
    mut notifier: LifecycleNotifier,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    tags: Query<&ColliderTag, Without<Player>>,
    mut player_query: Query<
        (
            &mut PlayerLocomotion,
            &PlayerTuning,
            &mut LinearVelocity,
            Option<&ComputedMass>,
        ),
        With<Player>,
    >,
) {
    let mut effects = Vec::new();

    for event in collision_start_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok((mut locomotion, tuning, mut velocity, mass)) =
                player_query.get_mut(player_entity)
            else {
                continue;
            };
            let Ok(tag) = tags.get(other) else {
                continue;
            };

            locomotion.contact_started(other, *tag, tuning, &mut effects);
            apply_player_effects(
                player_entity,
                effects.drain(..),
                &mut velocity,
                mass,
                &mut commands,
                &mut notifier,
            );
        }
    }

    for event in collision_end_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, other) in pairs {
            let Ok((mut locomotion, ..)) = player_query.get_mut(player_entity) else {
                continue;
            };
            let Ok(tag) = tags.get(other) else {
                continue;
            };

            locomotion.contact_ended(other, *tag);
        }
    }
}
