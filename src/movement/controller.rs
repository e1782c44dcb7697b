//! Movement domain: jump-assist timers and force shaping.

use bevy::prelude::*;

use crate::movement::{MovementBody, MovementTuning, PlatformerMovement};

/// Horizontal input at or below this magnitude counts as no input.
pub const HORIZONTAL_INPUT_EPSILON: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalMode {
    Accelerate,
    TurnGrounded,
    TurnAirborne,
    Decelerate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalDrive {
    pub mode: HorizontalMode,
    pub target_speed: f32,
    pub coefficient: f32,
}

impl HorizontalDrive {
    pub fn force(&self) -> Vec2 {
        Vec2::X * self.target_speed * self.coefficient
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalShaping {
    JumpCut,
    ApexHang,
    ExtraFall,
    None,
}

/// What happened during a [`PlatformerMovement::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    pub took_off: bool,
    pub landed: bool,
}

/// Sign with zero counted as positive, so a body at rest "faces" +X.
fn direction_sign(value: f32) -> f32 {
    if value >= 0.0 { 1.0 } else { -1.0 }
}

/// Pick the horizontal force mode for one fixed step.
pub fn horizontal_drive(
    tuning: &MovementTuning,
    input_x: f32,
    velocity_x: f32,
    grounded: bool,
) -> HorizontalDrive {
    if input_x.abs() <= HORIZONTAL_INPUT_EPSILON {
        return HorizontalDrive {
            mode: HorizontalMode::Decelerate,
            target_speed: -velocity_x,
            coefficient: tuning.decel_power,
        };
    }

    let target_speed = tuning.move_speed * input_x;
    let reversing = direction_sign(input_x) != direction_sign(velocity_x);

    let (mode, coefficient) = match (reversing, grounded) {
        (false, _) => (HorizontalMode::Accelerate, tuning.accel_power),
        (true, true) => (HorizontalMode::TurnGrounded, tuning.turning_power),
        (true, false) => (HorizontalMode::TurnAirborne, tuning.airborne_turning_power),
    };

    HorizontalDrive {
        mode,
        target_speed,
        coefficient,
    }
}

/// Pick the airborne gravity shaping branch. Order matters: a released jump
/// that is still rising is cut even inside the apex band.
pub fn vertical_shaping(
    tuning: &MovementTuning,
    holding_jump: bool,
    velocity_y: f32,
) -> VerticalShaping {
    if !holding_jump && velocity_y > 0.0 {
        VerticalShaping::JumpCut
    } else if velocity_y.abs() < tuning.apex_threshold {
        VerticalShaping::ApexHang
    } else if velocity_y < 0.0 {
        VerticalShaping::ExtraFall
    } else {
        VerticalShaping::None
    }
}

impl VerticalShaping {
    pub fn force(self, tuning: &MovementTuning, velocity_y: f32) -> Vec2 {
        let scale = match self {
            VerticalShaping::JumpCut => 1.0 - tuning.jump_release_multiplier,
            VerticalShaping::ApexHang => tuning.apex_multiplier - 1.0,
            VerticalShaping::ExtraFall => 1.0 - tuning.extra_fall_multiplier,
            VerticalShaping::None => return Vec2::ZERO,
        };
        Vec2::NEG_Y * velocity_y * scale
    }
}

impl PlatformerMovement {
    pub fn set_walk_input(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    /// Jump button went down: arm the buffer and start holding.
    pub fn press_jump(&mut self, tuning: &MovementTuning) {
        self.holding_jump = true;
        self.jump_buffer = tuning.jump_buffer_threshold;
    }

    /// Jump button went up. The buffer is left alone.
    pub fn release_jump(&mut self) {
        self.holding_jump = false;
    }

    /// Level-style jump input; a released-to-held transition is a press.
    pub fn set_jump_input(&mut self, tuning: &MovementTuning, held: bool) {
        match (self.holding_jump, held) {
            (false, true) => self.press_jump(tuning),
            (true, false) => self.release_jump(),
            _ => {}
        }
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_holding_jump(&self) -> bool {
        self.holding_jump
    }

    pub fn ground_buffer(&self) -> f32 {
        self.ground_buffer
    }

    pub fn jump_buffer(&self) -> f32 {
        self.jump_buffer
    }

    pub fn has_jumped_last_frame(&self) -> bool {
        self.jumped_last_frame
    }

    /// Per-frame update: jump trigger, ground sample and buffer decay.
    pub fn tick(
        &mut self,
        tuning: &MovementTuning,
        ground_hit: bool,
        dt: f32,
        body: &mut impl MovementBody,
    ) -> TickReport {
        let mut report = TickReport::default();

        if self.ground_buffer > 0.0 && self.jump_buffer > 0.0 {
            self.jump(tuning, body);
            report.jumped = true;
        }

        let was_grounded = self.grounded;
        self.grounded = ground_hit;
        report.landed = !was_grounded && self.grounded;

        self.ground_buffer = if self.grounded {
            tuning.coyote_time_threshold
        } else {
            (self.ground_buffer - dt).max(0.0)
        };
        self.jump_buffer = (self.jump_buffer - dt).max(0.0);

        if !self.grounded && self.jumped_last_frame {
            self.ground_buffer = 0.0;
            self.jump_buffer = 0.0;
            self.jumped_last_frame = false;
            report.took_off = true;
        }

        report
    }

    fn jump(&mut self, tuning: &MovementTuning, body: &mut impl MovementBody) {
        let mut velocity = body.velocity();
        velocity.y = 0.0;
        body.set_velocity(velocity);
        body.apply_impulse(Vec2::Y * tuning.jump_power);

        self.ground_buffer = 0.0;
        self.jump_buffer = 0.0;
        self.jumped_last_frame = true;
    }

    /// Fixed-step update: horizontal drive then airborne gravity shaping.
    pub fn fixed_tick(&self, tuning: &MovementTuning, body: &mut impl MovementBody) {
        self.apply_walking_force(tuning, body);
        self.apply_falling_force(tuning, body);
    }

    fn apply_walking_force(&self, tuning: &MovementTuning, body: &mut impl MovementBody) {
        let drive = horizontal_drive(tuning, self.direction.x, body.velocity().x, self.grounded);
        body.apply_force(drive.force());

        let mut velocity = body.velocity();
        velocity.x = velocity.x.clamp(-tuning.max_speed, tuning.max_speed);
        body.set_velocity(velocity);
    }

    fn apply_falling_force(&self, tuning: &MovementTuning, body: &mut impl MovementBody) {
        if self.grounded {
            return;
        }

        let vy = body.velocity().y;
        let shaping = vertical_shaping(tuning, self.holding_jump, vy);
        body.apply_force(shaping.force(tuning, vy));

        let mut velocity = body.velocity();
        velocity.y = velocity.y.max(-tuning.max_fall_speed);
        body.set_velocity(velocity);
    }
}
