//! Engine configuration
//!
//! Capacities and brush bounds are fixed when a grid or tracker is built.
//! Configuration files are JSON; every field is optional and falls back to
//! the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TesseraError};
use crate::store::DrawStyle;

/// Smallest brush radius
pub const MIN_BRUSH: usize = 0;

/// Largest brush radius
pub const MAX_BRUSH: usize = 5;

/// Brush radius of a freshly built grid
pub const DEFAULT_BRUSH: usize = 2;

/// Default bound for the undo and redo stacks
pub const DEFAULT_UNDO_CAPACITY: usize = 10_000;

/// Default bound for the replay log
pub const DEFAULT_REPLAY_CAPACITY: usize = 10_000;

/// Default number of layers one additive cell can hold
pub const DEFAULT_ADDITIVE_CAPACITY: usize = 100;

/// Configuration for a grid and its history trackers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Compositing strategy used by every cell
    pub draw_style: DrawStyle,
    pub width: usize,
    pub height: usize,
    pub undo_capacity: usize,
    pub replay_capacity: usize,
    pub additive_capacity: usize,
    /// Starting brush radius
    pub brush_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            draw_style: DrawStyle::Set,
            width: 16,
            height: 16,
            undo_capacity: DEFAULT_UNDO_CAPACITY,
            replay_capacity: DEFAULT_REPLAY_CAPACITY,
            additive_capacity: DEFAULT_ADDITIVE_CAPACITY,
            brush_size: DEFAULT_BRUSH,
        }
    }
}

impl EngineConfig {
    /// Default configuration for the given style and dimensions
    pub fn new(draw_style: DrawStyle, width: usize, height: usize) -> Self {
        Self {
            draw_style,
            width,
            height,
            ..Self::default()
        }
    }

    /// Load and validate a JSON configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TesseraError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject zero-sized grids, zero capacities and out-of-range brushes
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| -> Result<()> {
            Err(TesseraError::InvalidConfig {
                reason: reason.to_string(),
            })
        };

        if self.width == 0 || self.height == 0 {
            return invalid("grid dimensions must be non-zero");
        }
        if self.undo_capacity == 0 || self.replay_capacity == 0 {
            return invalid("history capacities must be non-zero");
        }
        if self.additive_capacity == 0 {
            return invalid("additive capacity must be non-zero");
        }
        if !(MIN_BRUSH..=MAX_BRUSH).contains(&self.brush_size) {
            return Err(TesseraError::InvalidConfig {
                reason: format!(
                    "brush size {} outside {}..={}",
                    self.brush_size, MIN_BRUSH, MAX_BRUSH
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.brush_size, DEFAULT_BRUSH);
        assert_eq!(config.undo_capacity, 10_000);
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = EngineConfig::new(DrawStyle::Add, 0, 4);
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_validate_rejects_large_brush() {
        let config = EngineConfig {
            brush_size: MAX_BRUSH + 1,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file_partial_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{ "draw_style": "SEQUENCE", "width": 4, "height": 3 }"#).unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.draw_style, DrawStyle::Sequence);
        assert_eq!((config.width, config.height), (4, 3));
        assert_eq!(config.additive_capacity, DEFAULT_ADDITIVE_CAPACITY);
    }

    #[test]
    fn test_from_file_mixed_case_style() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{ "draw_style": "Sequence", "width": 2, "height": 2 }"#).unwrap();

        let config = EngineConfig::from_file(&path).unwrap();
        assert_eq!(config.draw_style, DrawStyle::Sequence);

        fs::write(&path, r#"{ "draw_style": "multiply" }"#).unwrap();
        assert!(EngineConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempdir().unwrap();
        let err = EngineConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, TesseraError::FileReadError { .. }));
    }
}
