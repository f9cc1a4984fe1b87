//! Sprites domain: animation parameters and facing presentation.

mod animation;
mod facing;

#[cfg(test)]
mod tests;

pub use animation::{AnimationTrigger, Animator};
pub use facing::mirrored_scale_x;

use bevy::prelude::*;

use crate::movement::{LocomotionSet, PlayerLocomotion};
use crate::patrol::EnemyPatrol;
use crate::sprites::animation::apply_animation_events;
use crate::sprites::facing::sync_facing;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_animation_events,
                sync_facing::<PlayerLocomotion>,
                sync_facing::<EnemyPatrol>,
            )
                .after(LocomotionSet::Step),
        );
    }
}
