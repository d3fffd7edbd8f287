//! Tessera - Per-Cell Layer Compositing
//!
//! Tessera models a 2D drawing surface where every cell accumulates
//! colour layers independently, and where every user action can be undone,
//! redone or replayed deterministically.
//!
//! # Architecture
//!
//! - Layer stores: per-cell compositing with three strategies (set, additive, sequence)
//! - Grid: the cell matrix plus the shared brush size
//! - Paint actions: reversible commands applied forwards or backwards
//! - History: bounded undo/redo stacks and a bounded replay log
//!
//! History never snapshots the grid; undo and replay re-run inverse or
//! forward operations against it.

pub mod action;
pub mod brush;
pub mod cli;
pub mod config;
pub mod containers;
pub mod error;
pub mod grid;
pub mod history;
pub mod layers;
pub mod session;
pub mod store;

pub use action::{PaintAction, PaintStep, StepKind};
pub use config::EngineConfig;
pub use error::{Result, TesseraError};
pub use grid::Grid;
pub use history::{ReplayTracker, UndoTracker};
pub use layers::{Color, Layer};
pub use session::Session;
pub use store::{CellStore, DrawStyle, LayerStore};
