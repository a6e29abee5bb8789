//! Content domain: tests for RON parsing and loading.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use super::{
    CONTROLLER_FILE, PATROLLERS_FILE, PatrolDef, load_all_content, load_or_default,
    parse_controller_config, parse_patrollers,
};
use crate::controller::{ControllerConfig, Keyframe, ObstacleMask};
use crate::patrol::PatrolDirection;

fn shipped_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data")
}

// -----------------------------------------------------------------------------
// Controller config tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_controller_config() {
    let config = parse_controller_config(
        r#"(
            speed: 6.5,
            gravity: -20.0,
            gravity_scale: 2.0,
            jump_curve: [
                (time: 0.3, value: 2.0),
                (time: 0.0, value: 0.0),
            ],
            hold_input_mode: false,
            min_jump_duration: 0.1,
            movement_obstacles: 4,
            jump_obstacles: 6,
            ground_probe_offset: 0.5,
            half_extents: (0.4, 0.8, 0.5),
            freeze_jump: true,
        )"#,
    )
    .expect("config should parse");

    assert_eq!(config.speed, 6.5);
    assert_eq!(config.gravity, -20.0);
    assert_eq!(config.gravity_scale, 2.0);
    assert!(!config.hold_input_mode);
    assert_eq!(config.min_jump_duration, 0.1);
    assert_eq!(config.movement_obstacles, ObstacleMask(4));
    assert_eq!(config.jump_obstacles, ObstacleMask(6));
    assert_eq!(config.ground_probe_offset, 0.5);
    assert_eq!(config.half_extents(), Some(Vec3::new(0.4, 0.8, 0.5)));
    assert!(config.freeze_jump);
    assert!(!config.freeze_movement);

    // Keyframes come back sorted.
    assert_eq!(config.jump_curve.first_keyframe(), Keyframe::new(0.0, 0.0));
    assert_eq!(config.jump_curve.last_keyframe(), Keyframe::new(0.3, 2.0));
}

#[test]
fn test_missing_controller_fields_use_defaults() {
    let config = parse_controller_config("(speed: 3.0)").expect("config should parse");
    let defaults = ControllerConfig::default();

    assert_eq!(config.speed, 3.0);
    assert_eq!(config.gravity, defaults.gravity);
    assert_eq!(config.jump_curve, defaults.jump_curve);
    assert_eq!(config.movement_obstacles, ObstacleMask::ALL);
    assert_eq!(config.ground_probe_offset, 1.0);
    assert_eq!(config.half_extents(), None);

    assert_eq!(parse_controller_config("()").expect("empty config"), defaults);
}

#[test]
fn test_controller_config_survives_ron_round_trip() {
    let config = ControllerConfig {
        speed: 5.0,
        half_extents: Some([0.3, 0.6, 0.5]),
        ..ControllerConfig::default()
    };
    let text = ron::to_string(&config).expect("config should serialize");
    assert_eq!(parse_controller_config(&text).expect("config should parse"), config);
}

#[test]
fn test_bad_controller_ron_reports_file() {
    let error = parse_controller_config("(speed: \"fast\")").expect_err("should fail");
    assert_eq!(error.file, CONTROLLER_FILE);
    assert!(error.message.starts_with("Parse error"));
    assert!(
        error
            .to_string()
            .starts_with("Failed to load controller.ron: Parse error")
    );
}

// -----------------------------------------------------------------------------
// Patroller definition tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_patrollers() {
    let patrollers = parse_patrollers(
        r#"(
            schema_version: 1,
            items: [
                (
                    id: "a",
                    position: (1.0, 2.0),
                    speed: 3.0,
                    direction: Left,
                    distance: 4.0,
                    size: (0.5, 1.0),
                ),
                (id: "b", position: (0.0, 0.0), speed: 1.0, distance: 2.0, size: (1.0, 1.0)),
            ],
        )"#,
    )
    .expect("patrollers should parse");

    assert_eq!(patrollers.len(), 2);
    let first = &patrollers[0];
    assert_eq!(first.id, "a");
    assert_eq!(first.direction, PatrolDirection::Left);
    assert_eq!(first.origin(), Vec3::new(1.0, 2.0, 0.0));
    assert_eq!(first.body_size(), Vec2::new(0.5, 1.0));
    assert_eq!(patrollers[1].direction, PatrolDirection::Right);
}

#[test]
fn test_patrol_def_builds_patroller() {
    let def = PatrolDef {
        id: "spikes".to_string(),
        position: (2.0, -1.0),
        speed: 1.5,
        direction: PatrolDirection::Left,
        distance: 3.0,
        size: (1.0, 1.0),
    };
    let patroller = def.to_patroller();

    assert_eq!(patroller.origin(), Vec3::new(2.0, -1.0, 0.0));
    assert_eq!(patroller.speed, 1.5);
    assert_eq!(patroller.direction, PatrolDirection::Left);
    assert_eq!(patroller.distance, 3.0);
}

#[test]
fn test_patrollers_without_wrapper_fail() {
    let error = parse_patrollers("[]").expect_err("should fail");
    assert_eq!(error.file, PATROLLERS_FILE);
}

// -----------------------------------------------------------------------------
// Loading tests
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_loads() {
    let content = load_all_content(&shipped_data()).expect("shipped content should load");

    assert!(!content.controller.jump_curve.is_empty());
    assert!(content.controller.jump_curve.duration() > 0.0);
    assert!(!content.patrollers.is_empty());
    assert!(content.summary().contains("Patrollers"));
}

#[test]
fn test_missing_directory_reports_every_file() {
    let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
    let errors = load_all_content(&missing).expect_err("nothing to load");

    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.message.starts_with("IO error")));
    assert!(errors[0].file.ends_with(CONTROLLER_FILE));
    assert!(errors[1].file.ends_with(PATROLLERS_FILE));
}

#[test]
fn test_load_or_default_falls_back() {
    let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
    let content = load_or_default(&missing);

    assert_eq!(content.controller, ControllerConfig::default());
    assert!(content.patrollers.is_empty());
}
