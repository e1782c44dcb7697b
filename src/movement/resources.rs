//! Movement domain: tuning parameters and loaded movement profiles.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::RandomInputConfig;

/// Tuning for a single character. Supplied once at spawn and never mutated by
/// the movement systems.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    // Walking
    pub move_speed: f32,
    pub max_speed: f32,
    pub accel_power: f32,
    pub decel_power: f32,
    pub turning_power: f32,

    // Jumping
    /// Distance below the body origin of the ground-check circle centre
    pub ground_check_depth: f32,
    pub ground_check_radius: f32,
    pub jump_power: f32,
    /// Fraction of upward velocity kept when jump is released early
    pub jump_release_multiplier: f32,
    pub jump_buffer_threshold: f32,
    pub coyote_time_threshold: f32,

    // Airborne
    pub extra_fall_multiplier: f32,
    /// Vertical speed below which the apex hang applies
    pub apex_threshold: f32,
    pub apex_multiplier: f32,
    pub airborne_turning_power: f32,
    pub max_fall_speed: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            max_speed: 20.0,
            accel_power: 2.0,
            decel_power: 5.0,
            turning_power: 5.0,
            ground_check_depth: 1.0,
            ground_check_radius: 1.0,
            jump_power: 10.0,
            jump_release_multiplier: 0.5,
            jump_buffer_threshold: 0.1,
            coyote_time_threshold: 0.2,
            extra_fall_multiplier: 0.7,
            apex_threshold: 0.1,
            apex_multiplier: 0.5,
            airborne_turning_power: 10.0,
            max_fall_speed: 20.0,
        }
    }
}

impl MovementTuning {
    /// Peak height of an undisturbed jump under `gravity` for a body of
    /// `mass`: h = v² / (2g) with v = jump_power / mass.
    pub fn jump_height(&self, gravity: f32, mass: f32) -> f32 {
        if gravity <= 0.0 || mass <= 0.0 {
            return 0.0;
        }
        let v = self.jump_power / mass;
        v * v / (2.0 * gravity)
    }
}

/// Movement profiles loaded from `assets/data/movement.ron`.
#[derive(Resource, Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementProfiles {
    pub player: MovementTuning,
    pub bot: MovementTuning,
    pub bot_driver: RandomInputConfig,
}
