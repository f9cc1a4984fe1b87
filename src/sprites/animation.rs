//! Animation parameters and triggers.
//!
//! Playback itself belongs to whatever drives the sprite. This module only
//! keeps the named parameters and the last one-shot trigger per entity.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{AnimationCue, AnimationEvent};

/// One-shot triggers an animator can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTrigger {
    Jump,
    Death,
}

/// Entities without this component ignore animation cues.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct Animator {
    pub is_running: bool,
    pub is_grounded: bool,
    pub speed: f32,
    /// Most recent trigger.
    pub last_trigger: Option<AnimationTrigger>,
    /// Triggers received over the animator's lifetime.
    pub trigger_count: u32,
}

impl Animator {
    /// Animator already in its running state.
    pub fn running() -> Self {
        Self {
            is_running: true,
            ..default()
        }
    }

    pub fn apply(&mut self, cue: AnimationCue) {
        match cue {
            AnimationCue::Running(value) => self.is_running = value,
            AnimationCue::Grounded(value) => self.is_grounded = value,
            AnimationCue::Speed(value) => self.speed = value,
            AnimationCue::Jump => self.trigger(AnimationTrigger::Jump),
            AnimationCue::Death => self.trigger(AnimationTrigger::Death),
        }
    }

    fn trigger(&mut self, trigger: AnimationTrigger) {
        self.last_trigger = Some(trigger);
        self.trigger_count += 1;
    }
}

pub(crate) fn apply_animation_events(
    mut animation_events: MessageReader<AnimationEvent>,
    mut animators: Query<&mut Animator>,
) {
    for event in animation_events.read() {
        let Ok(mut animator) = animators.get_mut(event.entity) else {
            continue;
        };
        animator.apply(event.cue);
    }
}
