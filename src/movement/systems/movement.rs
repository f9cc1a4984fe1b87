//! Movement domain: frame and physics steps for the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::LifecycleNotifier;
use crate::movement::{MovementInput, Player, PlayerEffect, PlayerLocomotion, PlayerTuning};

/// Frame step: facing, jump, running loop and animation sync.
pub(crate) fn update_player_locomotion(
    mut commands: Commands,
    mut input: ResMut<MovementInput>,
    mut notifier: LifecycleNotifier,
    mut query: Query<
        (
            Entity,
            &mut PlayerLocomotion,
            &PlayerTuning,
            &mut LinearVelocity,
            Option<&ComputedMass>,
        ),
        With<Player>,
    >,
) {
    // The edge is consumed every frame whether or not anyone can jump.
    let jump_requested = input.take_jump();
    let mut effects = Vec::new();

    for (entity, mut locomotion, tuning, mut velocity, mass) in &mut query {
        locomotion.update(input.axis, jump_requested, tuning, &mut effects);
        apply_player_effects(
            entity,
            effects.drain(..),
            &mut velocity,
            mass,
            &mut commands,
            &mut notifier,
        );
    }
}

/// Physics step: horizontal drive, or a dead stop once dead.
pub(crate) fn apply_player_velocity(
    mut query: Query<(&PlayerLocomotion, &PlayerTuning, &mut LinearVelocity), With<Player>>,
) {
    for (locomotion, tuning, mut velocity) in &mut query {
        velocity.0 = locomotion.physics_velocity(tuning, velocity.0);
    }
}

pub(crate) fn apply_player_effects(
    entity: Entity,
    effects: impl IntoIterator<Item = PlayerEffect>,
    velocity: &mut LinearVelocity,
    mass: Option<&ComputedMass>,
    commands: &mut Commands,
    notifier: &mut LifecycleNotifier,
) {
    let inverse_mass = inverse_mass(mass);

    for effect in effects {
        match effect {
            PlayerEffect::Jump { .. } | PlayerEffect::HaltMotion => {
                velocity.0 = effect.apply_to_velocity(velocity.0, inverse_mass);
            }
            PlayerEffect::Sound(command) => notifier.sound(entity, command),
            PlayerEffect::Animation(cue) => notifier.animate(entity, cue),
            PlayerEffect::DisableCollision => {
                commands
                    .entity(entity)
                    .insert((ColliderDisabled, GravityScale(0.0)));
            }
            PlayerEffect::ScheduleGameOver { delay } => {
                info!("Player died!");
                notifier.schedule_game_over(entity, delay);
            }
        }
    }
}

/// Without mass data the body is treated as unit mass.
pub(crate) fn inverse_mass(mass: Option<&ComputedMass>) -> f32 {
    mass.map_or(1.0, |m| m.inverse())
}
