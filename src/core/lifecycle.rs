//! Core domain: the notifier actors use to reach their collaborators.

use std::time::Duration;

use bevy::ecs::message::MessageWriter;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::core::events::{
    AnimationCue, AnimationEvent, GameOverEvent, SoundCommand, SoundCue, SoundEvent,
};
use crate::core::schedule::DeferredTasks;

/// Injected into locomotion systems in place of global managers.
#[derive(SystemParam)]
pub struct LifecycleNotifier<'w> {
    sounds: MessageWriter<'w, SoundEvent>,
    animations: MessageWriter<'w, AnimationEvent>,
    tasks: ResMut<'w, DeferredTasks>,
}

impl LifecycleNotifier<'_> {
    pub fn sound(&mut self, emitter: Entity, command: SoundCommand) {
        self.sounds.write(SoundEvent { emitter, command });
    }

    pub fn play_once(&mut self, emitter: Entity, cue: SoundCue) {
        self.sound(emitter, SoundCommand::PlayOnce(cue));
    }

    pub fn animate(&mut self, entity: Entity, cue: AnimationCue) {
        self.animations.write(AnimationEvent { entity, cue });
    }

    /// Fire `GameOverEvent` for `player` after `delay` of wall-clock time,
    /// unless the player is despawned first.
    pub fn schedule_game_over(&mut self, player: Entity, delay: Duration) {
        info!("Game over scheduled in {:.2}s", delay.as_secs_f32());
        self.tasks.schedule(
            player,
            delay,
            Box::new(move |world: &mut World| {
                world.write_message(GameOverEvent { player });
            }),
        );
    }
}
