//! Content domain: tests for profile parsing and validation.

use std::path::Path;

use super::{parse_profiles, resolve_profiles, validate_profiles};
use crate::ai::DelayRange;
use crate::movement::{MovementProfiles, MovementTuning};

#[test]
fn test_parse_partial_profiles_fills_defaults() {
    let text = r#"(
        player: (move_speed: 7.5, jump_power: 12.0),
        bot_driver: (
            direction_change_range: (min: 1.0, max: 2.0),
            full_stop_chance: 0.5,
            seed: 42,
        ),
    )"#;

    let profiles = parse_profiles("inline", text).unwrap();

    assert_eq!(profiles.player.move_speed, 7.5);
    assert_eq!(profiles.player.jump_power, 12.0);
    assert_eq!(profiles.player.max_speed, MovementTuning::default().max_speed);
    assert_eq!(profiles.bot, MovementTuning::default());
    assert_eq!(
        profiles.bot_driver.direction_change_range,
        DelayRange::new(1.0, 2.0)
    );
    assert_eq!(profiles.bot_driver.seed, Some(42));
}

#[test]
fn test_parse_error_names_source() {
    let err = parse_profiles("broken.ron", "(player: (move_speed: ))").unwrap_err();

    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_default_profiles_are_valid() {
    assert!(validate_profiles(&MovementProfiles::default()).is_empty());
}

#[test]
fn test_validation_reports_bad_values() {
    let mut profiles = MovementProfiles::default();
    profiles.player.max_speed = -1.0;
    profiles.bot.jump_release_multiplier = 1.5;
    profiles.bot_driver.full_stop_chance = 2.0;
    profiles.bot_driver.jump_interval_range = DelayRange::new(0.5, 0.25);

    let errors = validate_profiles(&profiles);
    let fields: Vec<_> = errors.iter().map(|e| (e.profile, e.field)).collect();

    assert_eq!(errors.len(), 4);
    assert!(fields.contains(&("player", "max_speed")));
    assert!(fields.contains(&("bot", "jump_release_multiplier")));
    assert!(fields.contains(&("bot_driver", "full_stop_chance")));
    assert!(fields.contains(&("bot_driver", "jump_interval_range")));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let profiles = resolve_profiles(Path::new("does/not/exist/movement.ron"));
    assert_eq!(profiles, MovementProfiles::default());
}

#[test]
fn test_shipped_profiles_parse_and_validate() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data/movement.ron");
    let profiles = super::load_profiles(&path).unwrap();

    assert!(validate_profiles(&profiles).is_empty());
    assert_eq!(profiles.bot.move_speed, 4.0);
}

#[test]
fn test_validation_rejects_non_finite_ranges() {
    let text = r#"(
        bot_driver: (
            direction_change_range: (min: 0.1, max: inf),
            jump_interval_range: (min: NaN, max: 0.3),
        ),
    )"#;

    let profiles = parse_profiles("inline", text).unwrap();
    let errors = validate_profiles(&profiles);
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();

    assert_eq!(errors.len(), 2);
    assert!(fields.contains(&"direction_change_range"));
    assert!(fields.contains(&"jump_interval_range"));
}

#[test]
fn test_validation_rejects_non_finite_tuning() {
    let mut profiles = MovementProfiles::default();
    profiles.player.move_speed = f32::INFINITY;
    profiles.player.ground_check_depth = f32::NAN;
    profiles.player.extra_fall_multiplier = f32::NEG_INFINITY;
    profiles.bot.apex_multiplier = f32::NAN;
    profiles.bot.coyote_time_threshold = f32::INFINITY;

    let errors = validate_profiles(&profiles);
    let fields: Vec<_> = errors.iter().map(|e| (e.profile, e.field)).collect();

    assert_eq!(errors.len(), 5);
    assert!(fields.contains(&("player", "move_speed")));
    assert!(fields.contains(&("player", "ground_check_depth")));
    assert!(fields.contains(&("player", "extra_fall_multiplier")));
    assert!(fields.contains(&("bot", "apex_multiplier")));
    assert!(fields.contains(&("bot", "coyote_time_threshold")));
}

#[test]
fn test_inverted_range_reports_max() {
    let mut profiles = MovementProfiles::default();
    profiles.bot_driver.jump_duration_range = DelayRange::new(0.3, 0.05);

    let errors = validate_profiles(&profiles);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].value, 0.05);

    profiles.bot_driver.jump_duration_range = DelayRange::new(-1.0, 0.05);
    assert_eq!(validate_profiles(&profiles)[0].value, -1.0);
}

#[test]
fn test_non_finite_profile_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("platformer_movement_non_finite.ron");
    std::fs::write(
        &path,
        "(bot_driver: (direction_change_range: (min: 0.1, max: inf)))",
    )
    .unwrap();

    let profiles = resolve_profiles(&path);
    let _ = std::fs::remove_file(&path);

    assert_eq!(profiles, MovementProfiles::default());
}
