//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, GroundContact, MovementTuning};

/// World-space centre of the ground-check circle.
pub(crate) fn ground_check_point(transform: &Transform, tuning: &MovementTuning) -> Vec2 {
    transform.translation.truncate() - Vec2::new(0.0, tuning.ground_check_depth)
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &MovementTuning, &mut GroundContact)>,
) {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, tuning, mut contact) in &mut query {
        let probe = Collider::circle(tuning.ground_check_radius);
        let hits = spatial_query.shape_intersections(
            &probe,
            ground_check_point(transform, tuning),
            0.0,
            &ground_filter,
        );

        contact.0 = !hits.is_empty();
    }
}
