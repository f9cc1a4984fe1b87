//! Movement domain: level geometry from actor data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ActorRoster;
use crate::movement::{ColliderTag, GameLayer};

pub(crate) fn spawn_platforms(mut commands: Commands, roster: Res<ActorRoster>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);

    let ground_layers =
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]);

    for platform in &roster.0.platforms {
        let size = Vec2::new(platform.size.0, platform.size.1);
        commands.spawn((
            platform.tag,
            Sprite {
                color: ground_color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(platform.position.0, platform.position.1, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }

    debug!("Spawned {} platforms", roster.0.platforms.len());
}
