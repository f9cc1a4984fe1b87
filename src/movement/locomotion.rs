//! Movement domain: the player's locomotion state machine.
//!
//! `PlayerLocomotion` is plain data driven by three inputs: ground/enemy
//! contacts, the per-frame input snapshot and the fixed physics step. It
//! never touches the world itself. Everything it wants done comes back as
//! a list of `PlayerEffect`s which the systems apply in order.

use std::time::Duration;

use bevy::prelude::*;

use crate::core::{AnimationCue, SoundCommand, SoundCue};
use crate::movement::{ColliderTag, Faces, Facing, GroundContacts, PlayerTuning};

/// Axis magnitude above which the player counts as running.
pub const RUN_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    #[default]
    IdleRun,
    Airborne,
    /// Terminal.
    Dead,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEffect {
    /// Zero vertical velocity, then apply an upward impulse of this size.
    Jump { impulse: f32 },
    Sound(SoundCommand),
    Animation(AnimationCue),
    /// Zero the body's velocity.
    HaltMotion,
    /// Stop the body from taking part in collisions.
    DisableCollision,
    ScheduleGameOver { delay: Duration },
}

impl PlayerEffect {
    /// Body velocity after this effect. Effects that don't move the body
    /// return `velocity` unchanged.
    pub fn apply_to_velocity(&self, velocity: Vec2, inverse_mass: f32) -> Vec2 {
        match *self {
            PlayerEffect::Jump { impulse } => Vec2::new(velocity.x, impulse * inverse_mass),
            PlayerEffect::HaltMotion => Vec2::ZERO,
            _ => velocity,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct PlayerLocomotion {
    phase: PlayerPhase,
    facing: Facing,
    contacts: GroundContacts,
    axis: f32,
    running_loop: bool,
}

impl Faces for PlayerLocomotion {
    fn facing(&self) -> Facing {
        self.facing
    }
}

impl PlayerLocomotion {
    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn is_dead(&self) -> bool {
        self.phase == PlayerPhase::Dead
    }

    pub fn is_grounded(&self) -> bool {
        self.contacts.is_grounded()
    }

    #[cfg(test)]
    pub fn running_loop_active(&self) -> bool {
        self.running_loop
    }

    /// Frame step. `jump_requested` is the already-consumed jump edge; it is
    /// not buffered, so a jump that fails here is simply lost.
    pub fn update(
        &mut self,
        axis: f32,
        jump_requested: bool,
        tuning: &PlayerTuning,
        effects: &mut Vec<PlayerEffect>,
    ) {
        if self.is_dead() {
            self.axis = 0.0;
            self.sync_animation(effects);
            return;
        }

        self.axis = axis.clamp(-1.0, 1.0);

        if let Some(facing) = Facing::from_axis(self.axis) {
            self.facing = facing;
        }

        if jump_requested && self.is_grounded() {
            self.phase = PlayerPhase::Airborne;
            effects.push(PlayerEffect::Jump {
                impulse: tuning.jump_impulse,
            });
            effects.push(PlayerEffect::Animation(AnimationCue::Jump));
            effects.push(PlayerEffect::Sound(SoundCommand::PlayOnce(SoundCue::Jump)));
            debug!("Jump: impulse={}", tuning.jump_impulse);
        }

        self.update_running_loop(effects);
        self.sync_animation(effects);
    }

    /// Velocity for this physics step given the body's current velocity.
    pub fn physics_velocity(&self, tuning: &PlayerTuning, current: Vec2) -> Vec2 {
        if self.is_dead() {
            return Vec2::ZERO;
        }
        Vec2::new(self.axis * tuning.move_speed, current.y)
    }

    pub fn contact_started(
        &mut self,
        collider: Entity,
        tag: ColliderTag,
        tuning: &PlayerTuning,
        effects: &mut Vec<PlayerEffect>,
    ) {
        match tag {
            ColliderTag::Ground => {
                let was_grounded = self.is_grounded();
                self.contacts.enter(collider);
                if !was_grounded {
                    debug!("Landed: contacts={}", self.contacts.len());
                }
                if self.phase == PlayerPhase::Airborne {
                    self.phase = PlayerPhase::IdleRun;
                }
            }
            ColliderTag::Enemy => {
                if !self.is_dead() {
                    self.die(tuning, effects);
                }
            }
            ColliderTag::Player => {}
        }
    }

    pub fn contact_ended(&mut self, collider: Entity, tag: ColliderTag) {
        if tag != ColliderTag::Ground || !self.contacts.exit(collider) {
            return;
        }
        if !self.is_grounded() {
            debug!("Left ground");
            if self.phase == PlayerPhase::IdleRun {
                self.phase = PlayerPhase::Airborne;
            }
        }
    }

    /// One-way transition to `Dead`. Returns false if already dead, in
    /// which case nothing is emitted.
    pub fn die(&mut self, tuning: &PlayerTuning, effects: &mut Vec<PlayerEffect>) -> bool {
        if self.is_dead() {
            return false;
        }
        self.phase = PlayerPhase::Dead;

        if self.running_loop {
            self.running_loop = false;
            effects.push(PlayerEffect::Sound(SoundCommand::StopLoop));
        }
        effects.push(PlayerEffect::Sound(SoundCommand::PlayOnce(SoundCue::Death)));
        self.axis = 0.0;
        effects.push(PlayerEffect::HaltMotion);
        effects.push(PlayerEffect::Animation(AnimationCue::Death));
        effects.push(PlayerEffect::DisableCollision);
        effects.push(PlayerEffect::ScheduleGameOver {
            delay: tuning.respawn_delay,
        });
        true
    }

    /// Start or stop the running loop on edges of `grounded && running`.
    fn update_running_loop(&mut self, effects: &mut Vec<PlayerEffect>) {
        let should_run = self.is_grounded() && self.axis.abs() > RUN_THRESHOLD;

        if should_run && !self.running_loop {
            self.running_loop = true;
            effects.push(PlayerEffect::Sound(SoundCommand::StartLoop(SoundCue::Running)));
            debug!("Running loop on");
        } else if !should_run && self.running_loop {
            self.running_loop = false;
            effects.push(PlayerEffect::Sound(SoundCommand::StopLoop));
            debug!("Running loop off");
        }
    }

    fn sync_animation(&self, effects: &mut Vec<PlayerEffect>) {
        let speed = self.axis.abs();
        effects.push(PlayerEffect::Animation(AnimationCue::Grounded(
            self.is_grounded(),
        )));
        effects.push(PlayerEffect::Animation(AnimationCue::Running(
            speed > RUN_THRESHOLD,
        )));
        effects.push(PlayerEffect::Animation(AnimationCue::Speed(speed)));
    }
}
