//! Debug overlay for tuning patrols and ground sensing.
//!
//! F1 toggles gizmos for every enemy's ground check (green when it finds
//! ground, red when it does not) and its patrol waypoints, plus the
//! player's current locomotion phase.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::movement::{Faces, Player, PlayerLocomotion, PlayerPhase};
use crate::patrol::{Enemy, EnemyPatrol, GroundCheck};

const WAYPOINT_MARK: f32 = 0.15;

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, toggle_debug_overlay)
            .add_systems(
                Update,
                (draw_patrol_gizmos, draw_player_gizmos)
                    .run_if(|state: Res<DebugState>| state.overlay_visible),
            );
    }
}

fn toggle_debug_overlay(keyboard: Res<ButtonInput<KeyCode>>, mut debug_state: ResMut<DebugState>) {
    if keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote) {
        debug_state.overlay_visible = !debug_state.overlay_visible;
        info!("Debug overlay: {}", debug_state.overlay_visible);
    }
}

fn draw_patrol_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &EnemyPatrol, &GroundCheck), With<Enemy>>,
) {
    for (transform, patrol, check) in &query {
        let position = transform.translation.truncate();
        let probe = check.point(position, patrol.sensed_facing());
        let color = if patrol.ground_ahead() {
            Color::srgb(0.2, 0.9, 0.3)
        } else {
            Color::srgb(0.9, 0.2, 0.2)
        };
        gizmos.circle_2d(Isometry2d::from_translation(probe), check.radius, color);

        let (point_a, point_b) = patrol.waypoints();
        let waypoint_color = Color::srgb(0.9, 0.8, 0.2);
        gizmos.line_2d(point_a, point_b, Color::srgba(0.9, 0.8, 0.2, 0.3));
        for point in [point_a, point_b] {
            gizmos.circle_2d(Isometry2d::from_translation(point), WAYPOINT_MARK, waypoint_color);
        }
        gizmos.line_2d(position, patrol.target(), waypoint_color);
    }
}

fn draw_player_gizmos(mut gizmos: Gizmos, query: Query<(&Transform, &PlayerLocomotion), With<Player>>) {
    for (transform, locomotion) in &query {
        let color = match locomotion.phase() {
            PlayerPhase::IdleRun => Color::srgb(0.2, 0.9, 0.3),
            PlayerPhase::Airborne => Color::srgb(0.3, 0.6, 0.95),
            PlayerPhase::Dead => Color::srgb(0.5, 0.5, 0.5),
        };
        let position = transform.translation.truncate();
        gizmos.circle_2d(Isometry2d::from_translation(position), 0.1, color);
        gizmos.line_2d(
            position,
            position + Vec2::new(0.5 * locomotion.facing().sign(), 0.0),
            color,
        );
    }
}
