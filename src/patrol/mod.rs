//! Patrol domain: enemies walking between two waypoints.

mod components;
mod route;
mod spawn;
mod systems;


pub use components::{
    Enemy, GroundCheck, PatrolTuning, ProximitySensor, SoundTimer, proximity_owner,
};
pub use route::{EnemyPatrol, PatrolLeg, PatrolStep, TurnReason, WAYPOINT_REACHED};

use bevy::prelude::*;

use crate::patrol::spawn::spawn_enemies;
use crate::patrol::systems::{detect_player_proximity, update_patrols};

pub struct PatrolPlugin;

impl Plugin for PatrolPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_enemies)
            .add_systems(FixedUpdate, update_patrols)
            .add_systems(Update, detect_player_proximity);
    }
}
