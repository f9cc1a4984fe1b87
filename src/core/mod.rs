//! Core domain: game state, collaborator messages and deferred tasks.

mod events;
mod lifecycle;
mod schedule;
mod state;
mod systems;


pub use events::{
    AnimationCue, AnimationEvent, GameOverEvent, SoundCommand, SoundCue, SoundEvent,
};
pub use lifecycle::LifecycleNotifier;
pub use schedule::DeferredTasks;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{enter_game_over, run_deferred_tasks, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<DeferredTasks>()
            .add_message::<GameOverEvent>()
            .add_message::<SoundEvent>()
            .add_message::<AnimationEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(First, run_deferred_tasks)
            .add_systems(Update, enter_game_over);
    }
}
