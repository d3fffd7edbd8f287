//! Brush strokes
//!
//! A stroke touches every cell within Manhattan distance `brush_size` of
//! the cursor, clipped to the grid. Only cells whose store reports a change
//! are recorded, so undoing the resulting action reverses exactly what the
//! stroke did.

use log::debug;

use crate::action::{PaintAction, PaintStep, StepKind};
use crate::error::{Result, TesseraError};
use crate::grid::Grid;
use crate::layers::Layer;
use crate::store::LayerStore;

/// Cells within the brush radius of `(x, y)`, in row-major order
pub fn brush_cells(grid: &Grid, x: usize, y: usize) -> Vec<(usize, usize)> {
    let radius = grid.brush_size();
    let last_x = grid.width().saturating_sub(1);
    let last_y = grid.height().saturating_sub(1);
    let mut cells = Vec::new();
    for cx in x.saturating_sub(radius)..=x.saturating_add(radius).min(last_x) {
        let remaining = radius - cx.abs_diff(x);
        let ys = y.saturating_sub(remaining)..=y.saturating_add(remaining).min(last_y);
        cells.extend(ys.map(|cy| (cx, cy)));
    }
    cells
}

fn stroke(
    grid: &mut Grid,
    layer: Layer,
    x: usize,
    y: usize,
    kind: StepKind,
) -> Result<PaintAction> {
    if !grid.contains(x, y) {
        return Err(TesseraError::CellOutOfBounds {
            x,
            y,
            width: grid.width(),
            height: grid.height(),
        });
    }

    let mut action = PaintAction::new();
    for (cx, cy) in brush_cells(grid, x, y) {
        let cell = grid.cell_mut(cx, cy)?;
        let changed = match kind {
            StepKind::Apply => cell.add(layer),
            StepKind::Erase => cell.erase(layer),
        };
        if changed {
            action.add_step(PaintStep {
                x: cx,
                y: cy,
                layer,
                kind,
            });
        }
    }
    debug!(
        "{:?} {} at ({}, {}) radius {}: {} cells changed",
        kind,
        layer.name,
        x,
        y,
        grid.brush_size(),
        action.steps().len()
    );
    Ok(action)
}

/// Add `layer` around `(x, y)` and return the action describing the change
pub fn paint(grid: &mut Grid, layer: Layer, x: usize, y: usize) -> Result<PaintAction> {
    stroke(grid, layer, x, y, StepKind::Apply)
}

/// Erase with `layer` around `(x, y)` and return the action describing the change
pub fn erase(grid: &mut Grid, layer: Layer, x: usize, y: usize) -> Result<PaintAction> {
    stroke(grid, layer, x, y, StepKind::Erase)
}

/// Run the grid-wide special and return the matching action
pub fn special(grid: &mut Grid) -> PaintAction {
    grid.special();
    PaintAction::special()
}
