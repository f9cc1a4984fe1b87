//! Patrol domain: enemy components and tuning.

use bevy::prelude::*;

use crate::movement::{ColliderTag, Facing};

#[derive(Component, Debug)]
pub struct Enemy;

/// Marks the child sensor that notices the player coming close.
#[derive(Component, Debug)]
pub struct ProximitySensor;

/// The enemy whose proximity sensor the player just entered, if the contact
/// `pair` is one. Either collider of the pair may be the sensor.
pub fn proximity_owner(
    pair: (Entity, Entity),
    sensor_owner: impl Fn(Entity) -> Option<Entity>,
    tag: impl Fn(Entity) -> Option<ColliderTag>,
) -> Option<Entity> {
    let (first, second) = pair;
    [(first, second), (second, first)]
        .into_iter()
        .find_map(|(sensor, other)| {
            let owner = sensor_owner(sensor)?;
            (tag(other) == Some(ColliderTag::Player)).then_some(owner)
        })
}

/// Per-enemy tuning, fixed at spawn.
#[derive(Component, Debug, Clone)]
pub struct PatrolTuning {
    pub speed: f32,
    /// Seconds between idle monster sounds.
    pub sound_interval: f32,
}

impl Default for PatrolTuning {
    fn default() -> Self {
        Self {
            speed: 2.0,
            sound_interval: 3.0,
        }
    }
}

/// Where an enemy looks for ground ahead of itself.
#[derive(Component, Debug, Clone)]
pub struct GroundCheck {
    /// Offset while facing right; mirrored horizontally when facing left.
    pub offset: Vec2,
    pub radius: f32,
    pub tag: ColliderTag,
}

impl GroundCheck {
    pub fn point(&self, position: Vec2, facing: Facing) -> Vec2 {
        position + Vec2::new(self.offset.x * facing.sign(), self.offset.y)
    }
}

/// Countdown that fires every `interval` seconds.
#[derive(Debug, Clone)]
pub struct SoundTimer {
    interval: f32,
    remaining: f32,
}

impl SoundTimer {
    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            remaining: interval,
        }
    }

    #[cfg(test)]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Returns true when the countdown reaches zero, resetting it to the full
    /// interval so it never stays negative.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = self.interval;
            true
        } else {
            false
        }
    }
}
