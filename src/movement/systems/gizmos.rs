//! Movement domain: debug gizmos for input direction and ground check.

use bevy::prelude::*;

use super::collisions::ground_check_point;
use crate::movement::{MovementGizmos, MovementTuning, PlatformerMovement};

pub(crate) fn draw_movement_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &PlatformerMovement, &MovementTuning, &MovementGizmos)>,
) {
    for (transform, movement, tuning, toggles) in &query {
        if toggles.walking {
            gizmos.ray_2d(
                transform.translation.truncate(),
                movement.direction(),
                Color::srgb(0.2, 0.4, 1.0),
            );
        }
        if toggles.jumping {
            gizmos.circle_2d(
                ground_check_point(transform, tuning),
                tuning.ground_check_radius,
                Color::srgb(0.2, 0.9, 0.3),
            );
        }
    }
}
