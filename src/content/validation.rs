//! Validation for loaded movement profiles.

use crate::ai::{DelayRange, RandomInputConfig};
use crate::movement::{MovementProfiles, MovementTuning};

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub profile: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} = {} (expected {})",
            self.profile, self.field, self.value, self.expected
        )
    }
}

/// Push an error when `$value` fails `$check`.
macro_rules! check {
    ($errors:expr, $profile:expr, $field:literal, $value:expr, $check:expr, $expected:literal) => {
        let value: f32 = $value;
        if !$check(value) {
            $errors.push(ValidationError {
                profile: $profile,
                field: $field,
                value,
                expected: $expected,
            });
        }
    };
}

fn finite(v: f32) -> bool {
    v.is_finite()
}

fn non_negative(v: f32) -> bool {
    v.is_finite() && v >= 0.0
}

fn positive(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn unit_interval(v: f32) -> bool {
    (0.0..=1.0).contains(&v)
}

fn validate_tuning(errors: &mut Vec<ValidationError>, profile: &'static str, t: &MovementTuning) {
    check!(errors, profile, "move_speed", t.move_speed, non_negative, ">= 0");
    check!(errors, profile, "max_speed", t.max_speed, non_negative, ">= 0");
    check!(errors, profile, "accel_power", t.accel_power, non_negative, ">= 0");
    check!(errors, profile, "decel_power", t.decel_power, non_negative, ">= 0");
    check!(errors, profile, "turning_power", t.turning_power, non_negative, ">= 0");
    check!(
        errors,
        profile,
        "airborne_turning_power",
        t.airborne_turning_power,
        non_negative,
        ">= 0"
    );
    check!(
        errors,
        profile,
        "ground_check_radius",
        t.ground_check_radius,
        positive,
        "> 0"
    );
    check!(errors, profile, "jump_power", t.jump_power, non_negative, ">= 0");
    check!(
        errors,
        profile,
        "jump_release_multiplier",
        t.jump_release_multiplier,
        unit_interval,
        "0..=1"
    );
    check!(
        errors,
        profile,
        "jump_buffer_threshold",
        t.jump_buffer_threshold,
        non_negative,
        ">= 0"
    );
    check!(
        errors,
        profile,
        "coyote_time_threshold",
        t.coyote_time_threshold,
        non_negative,
        ">= 0"
    );
    check!(errors, profile, "apex_threshold", t.apex_threshold, non_negative, ">= 0");
    check!(errors, profile, "max_fall_speed", t.max_fall_speed, non_negative, ">= 0");
    check!(
        errors,
        profile,
        "ground_check_depth",
        t.ground_check_depth,
        finite,
        "finite"
    );
    check!(
        errors,
        profile,
        "extra_fall_multiplier",
        t.extra_fall_multiplier,
        finite,
        "finite"
    );
    check!(
        errors,
        profile,
        "apex_multiplier",
        t.apex_multiplier,
        non_negative,
        ">= 0"
    );
}

fn validate_range(
    errors: &mut Vec<ValidationError>,
    profile: &'static str,
    field: &'static str,
    range: &DelayRange,
) {
    // NaN fails every comparison, so check the accepted shape positively
    let valid = range.min.is_finite()
        && range.max.is_finite()
        && range.min >= 0.0
        && range.max >= range.min;
    if valid {
        return;
    }

    let value = if range.min.is_finite() && range.min >= 0.0 {
        range.max
    } else {
        range.min
    };
    errors.push(ValidationError {
        profile,
        field,
        value,
        expected: "finite 0 <= min <= max",
    });
}

fn validate_driver(errors: &mut Vec<ValidationError>, config: &RandomInputConfig) {
    let profile = "bot_driver";
    validate_range(
        errors,
        profile,
        "direction_change_range",
        &config.direction_change_range,
    );
    validate_range(errors, profile, "jump_interval_range", &config.jump_interval_range);
    validate_range(errors, profile, "jump_duration_range", &config.jump_duration_range);
    check!(
        errors,
        profile,
        "full_stop_chance",
        config.full_stop_chance,
        unit_interval,
        "0..=1"
    );
}

/// Validate every profile. Returns a list of errors, empty if all values are
/// usable.
pub fn validate_profiles(profiles: &MovementProfiles) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_tuning(&mut errors, "player", &profiles.player);
    validate_tuning(&mut errors, "bot", &profiles.bot);
    validate_driver(&mut errors, &profiles.bot_driver);

    errors
}
