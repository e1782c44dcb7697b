//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::MovementTuning;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Characters driven by `PlatformerMovement`
    Character,
}

/// Marker for the keyboard-controlled character
#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Per-character movement state: input, ground contact and jump-assist timers.
///
/// Input setters may be called at any time; the timers only advance from
/// [`PlatformerMovement::tick`] and forces are only applied from
/// [`PlatformerMovement::fixed_tick`].
#[derive(Component, Debug, Default, Clone)]
#[require(MovementTuning, GroundContact)]
pub struct PlatformerMovement {
    pub(crate) direction: Vec2,
    pub(crate) grounded: bool,
    /// Coyote buffer, seconds remaining
    pub(crate) ground_buffer: f32,
    /// Seconds remaining on the last jump press
    pub(crate) jump_buffer: f32,
    pub(crate) holding_jump: bool,
    pub(crate) jumped_last_frame: bool,
}

/// Latest ground-overlap sample, written every frame by the ground sensor.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GroundContact(pub bool);

/// Debug visualization toggles.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MovementGizmos {
    /// Draw the current input direction from the body origin
    pub walking: bool,
    /// Draw the ground-check circle
    pub jumping: bool,
}
