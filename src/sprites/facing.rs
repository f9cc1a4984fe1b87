//! Mirrors sprites to match their actor's facing.

use bevy::prelude::*;

use crate::movement::Faces;

/// Horizontal scale with its magnitude kept and its sign set by `facing_sign`.
pub fn mirrored_scale_x(scale_x: f32, facing_sign: f32) -> f32 {
    scale_x.abs() * facing_sign
}

pub(crate) fn sync_facing<T: Component + Faces>(
    mut query: Query<(&T, &mut Transform), Changed<T>>,
) {
    for (actor, mut transform) in &mut query {
        let scale_x = mirrored_scale_x(transform.scale.x, actor.facing().sign());
        if transform.scale.x != scale_x {
            transform.scale.x = scale_x;
        }
    }
}
