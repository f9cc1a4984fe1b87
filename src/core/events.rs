//! Core domain: messages delivered to external collaborators.
//!
//! Locomotion never talks to audio, animation or the game flow directly.
//! It writes one of these messages and whichever plugin owns the
//! collaborator reacts to it. No reader means the effect is dropped.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The player died and the respawn delay has elapsed.
#[derive(Debug)]
pub struct GameOverEvent {
    pub player: Entity,
}

impl Message for GameOverEvent {}

/// Named audio clips an actor can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Running,
    Jump,
    Death,
    Monster,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCommand {
    PlayOnce(SoundCue),
    StartLoop(SoundCue),
    StopLoop,
}

#[derive(Debug)]
pub struct SoundEvent {
    pub emitter: Entity,
    pub command: SoundCommand,
}

impl Message for SoundEvent {}

/// Animation parameters and one-shot triggers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationCue {
    /// `isRunning`
    Running(bool),
    /// `isGrounded`
    Grounded(bool),
    /// `Speed`
    Speed(f32),
    /// `Jump` trigger
    Jump,
    /// `Death` trigger
    Death,
}

#[derive(Debug)]
pub struct AnimationEvent {
    pub entity: Entity,
    pub cue: AnimationCue,
}

impl Message for AnimationEvent {}
