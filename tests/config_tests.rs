//! Tests for loading demo settings files

use std::path::PathBuf;

use dicedrop::dice3d::{ConfigError, DemoConfig, DemoVariant, SpinRange};

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dicedrop-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write settings");
    path
}

#[test]
fn loads_ron_settings_with_defaults_for_missing_fields() {
    let path = write_temp("set.ron", "(variant: set, seed: Some(7), die_spacing: 3.0)");

    let config = DemoConfig::load_from_file(&path).expect("valid RON");
    assert_eq!(config.variant, DemoVariant::Set);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.die_spacing, 3.0);
    assert_eq!(config.ortho_divisor(), 100.0);
    assert_eq!(config.camera_height, 20.0);
    assert_eq!(config.asset_root, "assets");
}

#[test]
fn loads_json_settings_with_overrides() {
    let path = write_temp(
        "single.json",
        r#"{
            "variant": "single",
            "ortho_divisor": 80.0,
            "spin": { "min": 1.0, "max": 2.0 },
            "bounds": { "height": 8.0 }
        }"#,
    );

    let config = DemoConfig::load_from_file(&path).expect("valid JSON");
    assert_eq!(config.variant, DemoVariant::Single);
    assert_eq!(config.ortho_divisor(), 80.0);
    assert_eq!(config.spin(), SpinRange::new(1.0, 2.0));
    assert_eq!(config.bounds.height, 8.0);
    assert_eq!(config.bounds.width, 1.0);
    assert_eq!(config.impulse(), None);
}

#[test]
fn partial_body_and_bounds_keep_remaining_defaults() {
    let path = write_temp(
        "partial.ron",
        "(die_body: (mass: 2.0), bounds: (wall_thickness: 1.0))",
    );

    let config = DemoConfig::load_from_file(&path).expect("partial sections parse");
    assert_eq!(config.die_body.mass, 2.0);
    assert_eq!(config.die_body.friction, 0.75);
    assert_eq!(config.die_body.restitution, 0.3);
    assert_eq!(config.bounds.wall_thickness, 1.0);
    assert_eq!(config.bounds.height, 5.0);
}

#[test]
fn rejects_unknown_extension() {
    let path = write_temp("settings.yaml", "variant: set");

    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
}

#[test]
fn reports_parse_errors() {
    let path = write_temp("broken.json", "{ \"variant\": ");

    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn reports_missing_file() {
    let path = std::env::temp_dir().join("dicedrop-does-not-exist.ron");

    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
