//! Movement domain: per-tick input snapshot.

use bevy::prelude::*;

/// Input sampled once per frame.
///
/// `jump_requested` is an edge: it goes true on the frame the jump button
/// goes down and stays true only until someone takes it.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis: f32,
    jump_held: bool,
    jump_requested: bool,
}

impl MovementInput {
    /// Record this frame's device state, deriving the jump edge from the
    /// previous snapshot.
    pub fn sample(&mut self, axis: f32, jump_down: bool) {
        self.axis = axis.clamp(-1.0, 1.0);
        if jump_down && !self.jump_held {
            self.jump_requested = true;
        }
        self.jump_held = jump_down;
    }

    /// Consume the jump edge. Returns true at most once per press.
    pub fn take_jump(&mut self) -> bool {
        std::mem::take(&mut self.jump_requested)
    }

    #[cfg(test)]
    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }
}
