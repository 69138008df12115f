#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_uses_handle_constants() {
    let c = EditorConfig::default();
    assert_eq!(c.handle_padding, 20.0);
    assert_eq!(c.handle_size, 10.0);
    assert_eq!(c.default_kind, ShapeKind::Rectangle);
    assert!(!c.guide_lines);
    assert!(!c.grid.visible);
    assert_eq!(c.grid.horizontal_size, 50.0);
    assert_eq!(c.grid.vertical_size, 50.0);
    assert_eq!(c.storage_key, "shapes");
    assert!(c.validate().is_ok());
}

#[test]
fn metrics_mirror_handle_fields() {
    let c = EditorConfig { handle_padding: 12.0, handle_size: 4.0, ..EditorConfig::default() };
    let m = c.metrics();
    assert_eq!(m.padding, 12.0);
    assert_eq!(m.half_size, 4.0);
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let c = EditorConfig::from_json(r#"{ "default_kind": "ellipse", "guide_lines": true }"#).unwrap();
    assert_eq!(c.default_kind, ShapeKind::Ellipse);
    assert!(c.guide_lines);
    assert_eq!(c.handle_padding, 20.0);
    assert_eq!(c.storage_key, "shapes");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = EditorConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn from_json_rejects_unknown_kind() {
    let err = EditorConfig::from_json(r#"{ "default_kind": "triangle" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn validate_rejects_negative_padding() {
    let c = EditorConfig { handle_padding: -1.0, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidPadding(_))));
}

#[test]
fn validate_rejects_non_positive_handle_size() {
    let c = EditorConfig { handle_size: 0.0, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidHandleSize(_))));
    let c = EditorConfig { handle_size: f64::NAN, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidHandleSize(_))));
}

#[test]
fn from_json_reads_partial_grid() {
    let c = EditorConfig::from_json(r#"{ "grid": { "visible": true, "vertical_size": 25 } }"#).unwrap();
    assert!(c.grid.visible);
    assert_eq!(c.grid.horizontal_size, 50.0);
    assert_eq!(c.grid.vertical_size, 25.0);
}

#[test]
fn validate_rejects_non_positive_grid_spacing() {
    let grid = GridConfig { horizontal_size: 0.0, ..GridConfig::default() };
    let c = EditorConfig { grid, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidGridSize(_))));
    let grid = GridConfig { vertical_size: f64::INFINITY, ..GridConfig::default() };
    let c = EditorConfig { grid, ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidGridSize(_))));
}

#[test]
fn validate_rejects_empty_storage_key() {
    let c = EditorConfig { storage_key: String::new(), ..EditorConfig::default() };
    assert!(matches!(c.validate(), Err(ConfigError::EmptyStorageKey)));
}

#[test]
fn error_messages_name_the_field() {
    let msg = ConfigError::InvalidHandleSize(-2.0).to_string();
    assert!(msg.contains("handle size"));
    assert!(msg.contains("-2"));
}

#[test]
fn env_parse_falls_back_when_unset() {
    assert_eq!(env_parse("SHAPEBOARD_TEST_SURELY_UNSET_VAR", 7.5), 7.5);
    assert_eq!(env_kind("SHAPEBOARD_TEST_SURELY_UNSET_KIND", ShapeKind::Ellipse), ShapeKind::Ellipse);
}
