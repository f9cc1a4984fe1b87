//! Movement domain: components and physics layers for locomotion.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Sensors (proximity triggers) - should not block movement
    Sensor,
}

/// What a collider is, as far as locomotion cares.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize,
)]
pub enum ColliderTag {
    #[default]
    Ground,
    Enemy,
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Sign applied to the horizontal scale.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    /// Facing implied by a horizontal axis value, if it is non-zero.
    pub fn from_axis(axis: f32) -> Option<Facing> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// Anything with a horizontal facing that sprites should mirror.
pub trait Faces {
    fn facing(&self) -> Facing;
}

/// Per-player tuning, fixed at spawn.
#[derive(Component, Debug, Clone)]
pub struct PlayerTuning {
    pub move_speed: f32,
    pub jump_impulse: f32,
    pub respawn_delay: Duration,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_impulse: 15.0,
            respawn_delay: Duration::from_secs(2),
        }
    }
}

/// Multiset of ground colliders currently touching an actor.
///
/// A collider can be entered more than once (several contact manifolds),
/// so each enter is matched by exactly one exit.
#[derive(Debug, Clone, Default)]
pub struct GroundContacts {
    contacts: Vec<Entity>,
}

impl GroundContacts {
    pub fn enter(&mut self, collider: Entity) {
        self.contacts.push(collider);
    }

    /// Returns false for an exit with no matching enter.
    pub fn exit(&mut self, collider: Entity) -> bool {
        match self.contacts.iter().position(|c| *c == collider) {
            Some(index) => {
                self.contacts.swap_remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.contacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }
}
