//! Movement domain: the minimal physics capability the controller drives.

use avian2d::prelude::*;
use bevy::prelude::*;

/// What the movement controller needs from a rigid body.
///
/// Forces are integrated over the current step by the implementor; impulses
/// change velocity instantly.
pub trait MovementBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn apply_force(&mut self, force: Vec2);
    fn apply_impulse(&mut self, impulse: Vec2);
}

/// avian2d adapter writing straight into `LinearVelocity`.
///
/// The solver still integrates position and gravity afterwards, so anything
/// applied here is seen by the next physics step.
pub struct RigidBodyDriver<'a> {
    velocity: &'a mut LinearVelocity,
    inverse_mass: f32,
    dt: f32,
}

impl<'a> RigidBodyDriver<'a> {
    pub fn new(velocity: &'a mut LinearVelocity, mass: &ComputedMass, dt: f32) -> Self {
        Self {
            velocity,
            inverse_mass: mass.inverse(),
            dt,
        }
    }
}

impl MovementBody for RigidBodyDriver<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_force(&mut self, force: Vec2) {
        self.velocity.0 += force * self.inverse_mass * self.dt;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }
}
