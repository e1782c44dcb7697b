//! AI domain: randomized walk/jump input for bot characters.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::movement::{MovementTuning, PlatformerMovement};

/// A range of seconds to wait, rolled uniformly (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DelayRange {
    pub min: f32,
    pub max: f32,
}

impl DelayRange {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Fixed value (no variance)
    pub fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Non-finite or inverted ranges collapse to `min` (0 when `min` is unusable).
    pub fn roll(&self, rng: &mut impl Rng) -> f32 {
        if !self.min.is_finite() {
            return 0.0;
        }
        if !self.max.is_finite() || self.min >= self.max {
            return self.min;
        }
        rng.random_range(self.min..=self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RandomInputConfig {
    /// Delay between direction re-rolls
    pub direction_change_range: DelayRange,
    /// Time spent with jump released
    pub jump_interval_range: DelayRange,
    /// Time spent holding jump
    pub jump_duration_range: DelayRange,
    /// Walk at full speed in the rolled direction instead of a partial axis
    pub normalized_direction: bool,
    /// Probability (0..=1) that a re-roll stands still
    pub full_stop_chance: f32,
    /// Fixed seed for reproducible bots; random when absent
    pub seed: Option<u64>,
}

impl Default for RandomInputConfig {
    fn default() -> Self {
        Self {
            direction_change_range: DelayRange::new(0.1, 4.0),
            jump_interval_range: DelayRange::new(0.25, 0.5),
            jump_duration_range: DelayRange::new(0.05, 0.3),
            normalized_direction: false,
            full_stop_chance: 0.2,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    /// Not started yet
    Idle,
    Released { remaining: f32 },
    Held { remaining: f32 },
}

/// Two independent timed loops feeding a `PlatformerMovement`: one re-rolls
/// the walk direction, the other alternates jump release and hold.
#[derive(Component, Debug)]
pub struct RandomInputDriver {
    pub config: RandomInputConfig,
    rng: ChaCha8Rng,
    direction_wait: Option<f32>,
    jump_phase: JumpPhase,
}

impl RandomInputDriver {
    pub fn new(config: RandomInputConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            direction_wait: None,
            jump_phase: JumpPhase::Idle,
        }
    }

    pub fn jump_phase(&self) -> JumpPhase {
        self.jump_phase
    }

    /// Advance both loops by `dt` seconds. On the first call both loops run
    /// their opening step immediately.
    pub fn advance(
        &mut self,
        dt: f32,
        movement: &mut PlatformerMovement,
        tuning: &MovementTuning,
    ) {
        let direction_wait = self.direction_wait;
        match direction_wait {
            Some(wait) if wait - dt > 0.0 => self.direction_wait = Some(wait - dt),
            _ => {
                let direction = self.roll_direction();
                movement.set_walk_input(Vec2::new(direction, 0.0));
                let wait = self.config.direction_change_range.roll(&mut self.rng);
                self.direction_wait = Some(wait);
            }
        }

        let phase = self.jump_phase;
        self.jump_phase = match phase {
            JumpPhase::Idle => self.release(movement, tuning),
            JumpPhase::Released { remaining } if remaining - dt > 0.0 => JumpPhase::Released {
                remaining: remaining - dt,
            },
            JumpPhase::Released { .. } => {
                movement.set_jump_input(tuning, true);
                JumpPhase::Held {
                    remaining: self.config.jump_duration_range.roll(&mut self.rng),
                }
            }
            JumpPhase::Held { remaining } if remaining - dt > 0.0 => JumpPhase::Held {
                remaining: remaining - dt,
            },
            JumpPhase::Held { .. } => self.release(movement, tuning),
        };
    }

    fn release(
        &mut self,
        movement: &mut PlatformerMovement,
        tuning: &MovementTuning,
    ) -> JumpPhase {
        movement.set_jump_input(tuning, false);
        JumpPhase::Released {
            remaining: self.config.jump_interval_range.roll(&mut self.rng),
        }
    }

    fn roll_direction(&mut self) -> f32 {
        if self.rng.random::<f32>() < self.config.full_stop_chance {
            return 0.0;
        }

        let direction = self.rng.random_range(-1.0..=1.0_f32);
        if self.config.normalized_direction {
            if direction >= 0.0 { 1.0 } else { -1.0 }
        } else {
            direction
        }
    }
}

pub(crate) fn drive_random_input(
    time: Res<Time>,
    mut query: Query<(&mut RandomInputDriver, &mut PlatformerMovement, &MovementTuning)>,
) {
    let dt = time.delta_secs();

    for (mut driver, mut movement, tuning) in &mut query {
        driver.advance(dt, &mut movement, tuning);
    }
}
