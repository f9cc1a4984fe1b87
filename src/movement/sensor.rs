//! Movement domain: overlap-based ground sensing.

use avian2d::prelude::*;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use crate::movement::ColliderTag;

/// Answers "is there a collider with this tag overlapping this circle now?"
#[derive(SystemParam)]
pub struct GroundSensor<'w, 's> {
    spatial_query: SpatialQuery<'w, 's>,
    tags: Query<'w, 's, &'static ColliderTag>,
}

impl GroundSensor<'_, '_> {
    /// `ignore` is the asking actor, which must not count as its own ground.
    pub fn detects(&self, point: Vec2, radius: f32, tag: ColliderTag, ignore: Entity) -> bool {
        let filter = SpatialQueryFilter::default().with_excluded_entities([ignore]);
        let hits = self
            .spatial_query
            .shape_intersections(&Collider::circle(radius), point, 0.0, &filter);

        any_tagged(hits.iter().filter_map(|hit| self.tags.get(*hit).ok().copied()), tag)
    }
}

pub fn any_tagged(tags: impl IntoIterator<Item = ColliderTag>, wanted: ColliderTag) -> bool {
    tags.into_iter().any(|tag| tag == wanted)
}
