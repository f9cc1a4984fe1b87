//! Patrol domain: the two-waypoint patrol state machine.

use bevy::prelude::*;

use crate::movement::{Faces, Facing};
use crate::patrol::SoundTimer;

/// Distance at which a waypoint counts as reached (strictly less than).
pub const WAYPOINT_REACHED: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatrolLeg {
    #[default]
    TowardB,
    TowardA,
}

impl PatrolLeg {
    pub fn other(self) -> PatrolLeg {
        match self {
            PatrolLeg::TowardB => PatrolLeg::TowardA,
            PatrolLeg::TowardA => PatrolLeg::TowardB,
        }
    }

    /// B lies to the right of A.
    pub fn facing(self) -> Facing {
        match self {
            PatrolLeg::TowardB => Facing::Right,
            PatrolLeg::TowardA => Facing::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnReason {
    Ledge,
    Waypoint,
}

/// Outcome of one patrol tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PatrolStep {
    /// Horizontal velocity to command, `None` to leave the body alone.
    pub velocity_x: Option<f32>,
    pub turned: Option<TurnReason>,
    pub periodic_sound: bool,
}

#[derive(Component, Debug, Clone)]
pub struct EnemyPatrol {
    point_a: Vec2,
    point_b: Vec2,
    leg: PatrolLeg,
    facing: Facing,
    sensed_facing: Facing,
    sound_timer: SoundTimer,
    ground_ahead: bool,
}

impl Faces for EnemyPatrol {
    fn facing(&self) -> Facing {
        self.facing
    }
}

impl EnemyPatrol {
    pub fn new(point_a: Vec2, point_b: Vec2, sound_interval: f32) -> Self {
        Self {
            point_a,
            point_b,
            leg: PatrolLeg::TowardB,
            facing: PatrolLeg::TowardB.facing(),
            sensed_facing: PatrolLeg::TowardB.facing(),
            sound_timer: SoundTimer::new(sound_interval),
            ground_ahead: true,
        }
    }

    pub fn leg(&self) -> PatrolLeg {
        self.leg
    }

    pub fn target(&self) -> Vec2 {
        match self.leg {
            PatrolLeg::TowardB => self.point_b,
            PatrolLeg::TowardA => self.point_a,
        }
    }

    pub fn waypoints(&self) -> (Vec2, Vec2) {
        (self.point_a, self.point_b)
    }

    /// Ground result from the most recent tick.
    pub fn ground_ahead(&self) -> bool {
        self.ground_ahead
    }

    /// The facing `ground_ahead` was sensed with, which differs from the
    /// current facing right after a turn.
    pub fn sensed_facing(&self) -> Facing {
        self.sensed_facing
    }

    /// One patrol tick. `ground_ahead` must be sensed with the facing the
    /// enemy had before this call.
    pub fn tick(&mut self, dt: f32, position: Vec2, ground_ahead: bool, speed: f32) -> PatrolStep {
        let mut step = PatrolStep {
            periodic_sound: self.sound_timer.tick(dt),
            ..default()
        };
        self.ground_ahead = ground_ahead;
        self.sensed_facing = self.facing;

        if !ground_ahead {
            self.turn();
            step.turned = Some(TurnReason::Ledge);
            return step;
        }

        step.velocity_x = Some(match self.leg {
            PatrolLeg::TowardB => speed,
            PatrolLeg::TowardA => -speed,
        });

        if position.distance(self.target()) < WAYPOINT_REACHED {
            self.turn();
            step.turned = Some(TurnReason::Waypoint);
        }

        step
    }

    fn turn(&mut self) {
        self.leg = self.leg.other();
        self.facing = self.leg.facing();
    }
}
