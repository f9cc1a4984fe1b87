//! Core domain: camera, deferred task pump and game-over handling.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::events::GameOverEvent;
use crate::core::schedule::DeferredTasks;
use crate::core::state::GameState;

/// World units per pixel. Gameplay runs in metre-sized units.
const CAMERA_SCALE: f32 = 1.0 / 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

/// Runs deferred tasks on real time so a paused or slowed game clock does
/// not hold them back.
pub(crate) fn run_deferred_tasks(
    mut commands: Commands,
    time: Res<Time<Real>>,
    mut tasks: ResMut<DeferredTasks>,
    entities: Query<Entity>,
) {
    if tasks.is_empty() {
        return;
    }

    for run in tasks.tick(time.delta(), |owner| entities.contains(owner)) {
        commands.queue(move |world: &mut World| run(world));
    }
}

pub(crate) fn enter_game_over(
    mut game_over_events: MessageReader<GameOverEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in game_over_events.read() {
        if *state.get() == GameState::GameOver {
            continue;
        }
        info!("Game over: player {:?} is down", event.player);
        next_state.set(GameState::GameOver);
    }
}
