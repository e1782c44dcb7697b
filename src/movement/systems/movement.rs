//! Movement domain: per-frame and fixed-step locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GroundContact, MovementTuning, PlatformerMovement, RigidBodyDriver};

/// Per-frame: jump trigger, ground state and buffer decay.
pub(crate) fn update_jump_state(
    time: Res<Time>,
    mut query: Query<(
        Entity,
        &mut PlatformerMovement,
        &MovementTuning,
        &GroundContact,
        &mut LinearVelocity,
        &ComputedMass,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut movement, tuning, contact, mut velocity, mass) in &mut query {
        let mut body = RigidBodyDriver::new(&mut velocity, mass, dt);
        let report = movement.tick(tuning, contact.0, dt, &mut body);

        if report.jumped {
            debug!("Jump: entity={:?}, impulse={}", entity, tuning.jump_power);
        }
        if report.took_off {
            debug!("Take-off: entity={:?}", entity);
        }
        if report.landed {
            debug!("Landed: entity={:?}", entity);
        }
    }
}

/// Fixed step: walking force, speed clamp and airborne gravity shaping.
pub(crate) fn apply_movement_forces(
    time: Res<Time>,
    mut query: Query<(
        &PlatformerMovement,
        &MovementTuning,
        &mut LinearVelocity,
        &ComputedMass,
    )>,
) {
    let dt = time.delta_secs();

    for (movement, tuning, mut velocity, mass) in &mut query {
        let mut body = RigidBodyDriver::new(&mut velocity, mass, dt);
        movement.fixed_tick(tuning, &mut body);
    }
}
