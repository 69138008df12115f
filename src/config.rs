//! Editor configuration.
//!
//! DESIGN
//! ======
//! `EditorConfig` is built once by the host and handed to the scene. Native
//! hosts read it from `SHAPEBOARD_*` environment variables; browser hosts pass
//! a JSON object. Environment loading never fails: missing or unparsable
//! values fall back to the defaults. JSON loading validates and reports.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::consts::{DEFAULT_STORAGE_KEY, GRID_SIZE, HANDLE_PADDING, HANDLE_SIZE};
use crate::handle::HandleMetrics;
use crate::shape::ShapeKind;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("handle padding must be a finite non-negative number, got {0}")]
    InvalidPadding(f64),
    #[error("handle size must be a finite positive number, got {0}")]
    InvalidHandleSize(f64),
    #[error("grid spacing must be a finite positive number, got {0}")]
    InvalidGridSize(f64),
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

// =============================================================================
// CONFIG
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Distance from a shape's bounds to its handle anchors.
    pub handle_padding: f64,
    /// Half the side length of a handle hit-box.
    pub handle_size: f64,
    /// Kind of shape created by dragging on empty canvas.
    pub default_kind: ShapeKind,
    /// Draw centre cross-hair and drag guide lines.
    pub guide_lines: bool,
    /// Background grid.
    pub grid: GridConfig,
    /// Key under which committed shapes are persisted.
    pub storage_key: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            handle_padding: HANDLE_PADDING,
            handle_size: HANDLE_SIZE,
            default_kind: ShapeKind::Rectangle,
            guide_lines: false,
            grid: GridConfig::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
        }
    }
}

impl EditorConfig {
    /// Read `SHAPEBOARD_*` variables, falling back to defaults per field.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let config = Self {
            handle_padding: env_parse("SHAPEBOARD_HANDLE_PADDING", defaults.handle_padding),
            handle_size: env_parse("SHAPEBOARD_HANDLE_SIZE", defaults.handle_size),
            default_kind: env_kind("SHAPEBOARD_DEFAULT_KIND", defaults.default_kind),
            guide_lines: env_parse("SHAPEBOARD_GUIDE_LINES", defaults.guide_lines),
            grid: GridConfig {
                visible: env_parse("SHAPEBOARD_GRID_VISIBLE", defaults.grid.visible),
                horizontal_size: env_parse("SHAPEBOARD_GRID_HORIZONTAL_SIZE", defaults.grid.horizontal_size),
                vertical_size: env_parse("SHAPEBOARD_GRID_VERTICAL_SIZE", defaults.grid.vertical_size),
            },
            storage_key: std::env::var("SHAPEBOARD_STORAGE_KEY").unwrap_or(defaults.storage_key),
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                tracing::warn!(error = %e, "invalid editor config from environment; using defaults");
                Self::default()
            }
        }
    }

    /// Parse and validate a JSON object. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed input and a validation variant for
    /// out-of-range values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that handle metrics and the storage key are usable.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.handle_padding.is_finite() || self.handle_padding < 0.0 {
            return Err(ConfigError::InvalidPadding(self.handle_padding));
        }
        if !self.handle_size.is_finite() || self.handle_size <= 0.0 {
            return Err(ConfigError::InvalidHandleSize(self.handle_size));
        }
        for size in [self.grid.horizontal_size, self.grid.vertical_size] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ConfigError::InvalidGridSize(size));
            }
        }
        if self.storage_key.is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    #[must_use]
    pub fn metrics(&self) -> HandleMetrics {
        HandleMetrics { padding: self.handle_padding, half_size: self.handle_size }
    }
}

/// Background grid drawn beneath the shapes.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub visible: bool,
    /// Spacing between vertical lines, along the x axis.
    pub horizontal_size: f64,
    /// Spacing between horizontal lines, along the y axis.
    pub vertical_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { visible: false, horizontal_size: GRID_SIZE, vertical_size: GRID_SIZE }
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(%key, value = %raw, "unparsable config value; using default");
            default
        }
    }
}

fn env_kind(key: &str, default: ShapeKind) -> ShapeKind {
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.to_ascii_lowercase().as_str() {
        "rectangle" | "rect" => ShapeKind::Rectangle,
        "ellipse" => ShapeKind::Ellipse,
        _ => {
            tracing::warn!(%key, value = %raw, "unknown shape kind; using default");
            default
        }
    }
}
