//! Error handling for Tessera
//!
//! Saturating capacity limits, duplicate adds and empty histories are not
//! errors; they are reported through `bool`/`Option` return values. Only
//! the conditions below surface as `Err`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tessera operations
pub type Result<T> = std::result::Result<T, TesseraError>;

/// Main error type for Tessera operations
#[derive(Error, Debug)]
pub enum TesseraError {
    // Grid Errors
    #[error("Cell ({x}, {y}) is outside the {width}x{height} grid")]
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("Row {x} is outside a grid of width {width}")]
    RowOutOfBounds { x: usize, width: usize },

    // Container Errors
    #[error("Set item {item} is outside 1..={capacity}")]
    SetItemOutOfRange { item: usize, capacity: usize },

    // Lookup Errors
    #[error("Unknown layer: {name}")]
    UnknownLayer { name: String },

    #[error("Unknown draw style: {style}")]
    UnknownDrawStyle { style: String },

    // Configuration Errors
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TesseraError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TesseraError::CellOutOfBounds { .. } => "CELL_OUT_OF_BOUNDS",
            TesseraError::RowOutOfBounds { .. } => "ROW_OUT_OF_BOUNDS",
            TesseraError::SetItemOutOfRange { .. } => "SET_ITEM_OUT_OF_RANGE",
            TesseraError::UnknownLayer { .. } => "UNKNOWN_LAYER",
            TesseraError::UnknownDrawStyle { .. } => "UNKNOWN_DRAW_STYLE",
            TesseraError::InvalidConfig { .. } => "INVALID_CONFIG",
            TesseraError::FileReadError { .. } => "FILE_READ_ERROR",
            TesseraError::Io(_) => "IO_ERROR",
            TesseraError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Check if the caller can fix the input and try again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            TesseraError::CellOutOfBounds { .. }
                | TesseraError::RowOutOfBounds { .. }
                | TesseraError::UnknownLayer { .. }
                | TesseraError::UnknownDrawStyle { .. }
                | TesseraError::InvalidConfig { .. }
                | TesseraError::FileReadError { .. }
        )
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            TesseraError::CellOutOfBounds { .. } | TesseraError::RowOutOfBounds { .. } => {
                Some("Coordinates must be smaller than the grid dimensions.")
            }
            TesseraError::UnknownLayer { .. } => {
                Some("Run 'tessera-cli layers' to list the built-in layers.")
            }
            TesseraError::UnknownDrawStyle { .. } => Some("Use one of SET, ADD or SEQUENCE."),
            TesseraError::InvalidConfig { .. } => {
                Some("Dimensions and capacities must be non-zero.")
            }
            TesseraError::FileReadError { .. } => Some("Check the file path and try again."),
            _ => None,
        }
    }
}
