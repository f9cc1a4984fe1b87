//! Content domain: actor configuration loaded from RON at startup.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{ActorsFile, EnemyDef, GroundCheckDef, PlatformDef, PlayerDef, SoundBankDef};
pub use loader::{ContentLoadError, load_actors_file, parse_actors};
pub use validation::{
    EnemyBlueprint, PlayerBlueprint, ValidationError, validate_enemy, validate_player,
};

use bevy::prelude::*;
use std::path::Path;

const ACTORS_PATH: &str = "assets/data/actors.ron";

/// Actor definitions for the current level, fixed once loaded.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActorRoster(pub ActorsFile);

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let actors = match load_actors_file(Path::new(ACTORS_PATH)) {
        Ok(actors) => {
            info!(
                "Loaded {}: {} enemies, {} platforms",
                ACTORS_PATH,
                actors.enemies.len(),
                actors.platforms.len()
            );
            actors
        }
        Err(e) => {
            warn!("{}; falling back to the built-in level", e);
            ActorsFile::default()
        }
    };

    commands.insert_resource(ActorRoster(actors));
}

/// Log every validation error for one actor.
pub(crate) fn report_rejected(errors: &[ValidationError]) {
    for error in errors {
        error!("Not spawning actor: {}", error);
    }
}
