//! Movement domain: player locomotion, contacts and ground sensing.

mod bootstrap;
mod components;
mod dev;
mod locomotion;
mod resources;
mod sensor;
pub(crate) mod systems;


pub use components::{ColliderTag, Faces, Facing, GameLayer, GroundContacts, Player, PlayerTuning};
pub use locomotion::{PlayerEffect, PlayerLocomotion, PlayerPhase, RUN_THRESHOLD};
pub use resources::MovementInput;
pub use sensor::{GroundSensor, any_tagged};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_platforms;
use crate::movement::systems::{
    apply_player_velocity, read_input, track_player_contacts, update_player_locomotion,
};

/// Ordering of the frame phase: sample input, then contacts, then the step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocomotionSet {
    Input,
    Contacts,
    Step,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (
                    LocomotionSet::Input,
                    LocomotionSet::Contacts,
                    LocomotionSet::Step,
                )
                    .chain(),
            )
            .add_systems(Startup, (spawn_platforms, spawn_player))
            .add_systems(Update, read_input.in_set(LocomotionSet::Input))
            .add_systems(Update, track_player_contacts.in_set(LocomotionSet::Contacts))
            .add_systems(Update, update_player_locomotion.in_set(LocomotionSet::Step))
            .add_systems(FixedUpdate, apply_player_velocity);
    }
}
