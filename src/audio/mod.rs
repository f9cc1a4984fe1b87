//! Audio domain: plays the sound cues actors emit.
//!
//! One-shots spawn a self-despawning `AudioPlayer`. A looped cue lives on a
//! child entity of its emitter, so it stops when the emitter goes away.


use std::collections::HashMap;

use bevy::asset::LoadState;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::content::{ActorRoster, SoundBankDef};
use crate::core::{SoundCommand, SoundCue, SoundEvent};

/// Loaded clips per cue. A cue with no clip plays nothing.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    clips: HashMap<SoundCue, Handle<AudioSource>>,
}

impl SoundBank {
    pub fn insert(&mut self, cue: SoundCue, clip: Handle<AudioSource>) {
        self.clips.insert(cue, clip);
    }

    /// The clip to play for `cue`, if any. A clip whose asset failed to load
    /// would never finish playing, so it is dropped from the bank the first
    /// time `failed` reports it.
    pub fn playable(
        &mut self,
        cue: SoundCue,
        failed: impl Fn(&Handle<AudioSource>) -> bool,
    ) -> Option<Handle<AudioSource>> {
        let clip = self.clips.get(&cue)?;
        if failed(clip) {
            warn!("Sound clip for {:?} failed to load, cue is now silent", cue);
            self.clips.remove(&cue);
            return None;
        }
        Some(clip.clone())
    }
}

/// The asset path configured for each cue.
pub fn cue_paths(def: &SoundBankDef) -> Vec<(SoundCue, &str)> {
    [
        (SoundCue::Running, &def.running),
        (SoundCue::Jump, &def.jump),
        (SoundCue::Death, &def.death),
        (SoundCue::Monster, &def.monster),
    ]
    .into_iter()
    .filter_map(|(cue, path)| path.as_deref().map(|path| (cue, path)))
    .collect()
}

/// A looping sound owned by `emitter`.
#[derive(Component, Debug)]
pub struct LoopingSound {
    pub emitter: Entity,
}

pub struct AudioFeedbackPlugin;

impl Plugin for AudioFeedbackPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sound_bank)
            .add_systems(PostUpdate, play_sound_events);
    }
}

fn load_sound_bank(
    mut commands: Commands,
    roster: Res<ActorRoster>,
    asset_server: Option<Res<AssetServer>>,
) {
    let Some(asset_server) = asset_server else {
        warn!("No asset server, sounds are disabled");
        return;
    };

    let mut bank = SoundBank::default();
    let paths = cue_paths(&roster.0.sounds);
    for (cue, path) in &paths {
        bank.insert(*cue, asset_server.load(path.to_string()));
    }

    info!("Sound bank: {} of 4 cues have clips", paths.len());
    commands.insert_resource(bank);
}

fn play_sound_events(
    mut commands: Commands,
    mut sound_events: MessageReader<SoundEvent>,
    bank: Option<ResMut<SoundBank>>,
    asset_server: Option<Res<AssetServer>>,
    loops: Query<(Entity, &LoopingSound)>,
    emitters: Query<Entity>,
) {
    let Some(mut bank) = bank else {
        // Drain so stale events don't replay once a bank shows up
        for _ in sound_events.read() {}
        return;
    };

    let failed = |clip: &Handle<AudioSource>| {
        asset_server
            .as_ref()
            .is_some_and(|server| matches!(server.load_state(clip.id()), LoadState::Failed(_)))
    };

    for event in sound_events.read() {
        match event.command {
            SoundCommand::PlayOnce(cue) => {
                let Some(clip) = bank.playable(cue, failed) else {
                    continue;
                };
                commands.spawn((AudioPlayer::new(clip), PlaybackSettings::DESPAWN));
            }
            SoundCommand::StartLoop(cue) => {
                stop_loops(&mut commands, &loops, event.emitter);
                let Some(clip) = bank.playable(cue, failed) else {
                    continue;
                };
                if !emitters.contains(event.emitter) {
                    continue;
                }
                commands.spawn((
                    LoopingSound {
                        emitter: event.emitter,
                    },
                    AudioPlayer::new(clip),
                    PlaybackSettings::LOOP,
                    ChildOf(event.emitter),
                ));
            }
            SoundCommand::StopLoop => stop_loops(&mut commands, &loops, event.emitter),
        }
    }
}

fn stop_loops(commands: &mut Commands, loops: &Query<(Entity, &LoopingSound)>, emitter: Entity) {
    for (entity, looping) in loops {
        if looping.emitter == emitter {
            commands.entity(entity).despawn();
        }
    }
}
