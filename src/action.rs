//! Reversible paint actions
//!
//! A [`PaintAction`] records cell-level layer operations plus an optional
//! grid-wide special. It carries everything needed to replay its effect
//! forwards (`redo_apply`) or backwards (`undo_apply`); nothing is
//! snapshotted. Once handed to a tracker it is shared as `Rc<PaintAction>`
//! and never mutated again.

use log::trace;
use uuid::Uuid;

use crate::error::{Result, TesseraError};
use crate::grid::Grid;
use crate::layers::Layer;
use crate::store::LayerStore;

/// What a step did to its cell when first performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Apply,
    Erase,
}

impl StepKind {
    pub fn inverse(self) -> Self {
        match self {
            StepKind::Apply => StepKind::Erase,
            StepKind::Erase => StepKind::Apply,
        }
    }
}

/// One layer operation on one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintStep {
    pub x: usize,
    pub y: usize,
    pub layer: Layer,
    pub kind: StepKind,
}

impl PaintStep {
    pub fn apply(x: usize, y: usize, layer: Layer) -> Self {
        Self {
            x,
            y,
            layer,
            kind: StepKind::Apply,
        }
    }

    pub fn erase(x: usize, y: usize, layer: Layer) -> Self {
        Self {
            x,
            y,
            layer,
            kind: StepKind::Erase,
        }
    }

    /// Run `kind` against this step's cell, returning whether it changed
    fn perform(&self, grid: &mut Grid, kind: StepKind) -> Result<bool> {
        let cell = grid.cell_mut(self.x, self.y)?;
        Ok(match kind {
            StepKind::Apply => cell.add(self.layer),
            StepKind::Erase => cell.erase(self.layer),
        })
    }
}

/// A reversible batch of paint steps
#[derive(Debug, Clone)]
pub struct PaintAction {
    id: Uuid,
    steps: Vec<PaintStep>,
    is_special: bool,
}

impl Default for PaintAction {
    fn default() -> Self {
        Self::new()
    }
}

impl PaintAction {
    /// Empty, non-special action
    pub fn new() -> Self {
        Self::with_steps(Vec::new(), false)
    }

    /// Action whose only effect is a grid-wide special
    pub fn special() -> Self {
        Self::with_steps(Vec::new(), true)
    }

    pub fn with_steps(steps: Vec<PaintStep>, is_special: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            steps,
            is_special,
        }
    }

    /// Builder form of [`PaintAction::add_step`]
    pub fn with_step(mut self, step: PaintStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Record a step while the action is still being built
    pub fn add_step(&mut self, step: PaintStep) {
        self.steps.push(step);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Steps in recorded order
    pub fn steps(&self) -> &[PaintStep] {
        &self.steps
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// True when applying the action would change nothing
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && !self.is_special
    }

    /// Short human-readable summary
    pub fn description(&self) -> String {
        match (self.steps.len(), self.is_special) {
            (0, true) => "special".to_string(),
            (n, true) => format!("{} steps + special", n),
            (n, false) => format!("{} steps", n),
        }
    }

    fn check_bounds(&self, grid: &Grid) -> Result<()> {
        match self.steps.iter().find(|step| !grid.contains(step.x, step.y)) {
            Some(step) => Err(TesseraError::CellOutOfBounds {
                x: step.x,
                y: step.y,
                width: grid.width(),
                height: grid.height(),
            }),
            None => Ok(()),
        }
    }

    /// Replay the forward effect: steps in recorded order, then the special
    ///
    /// Fails without touching the grid if any step lies outside it.
    pub fn redo_apply(&self, grid: &mut Grid) -> Result<()> {
        self.check_bounds(grid)?;
        trace!("redo {} ({})", self.id, self.description());
        for step in &self.steps {
            step.perform(grid, step.kind)?;
        }
        if self.is_special {
            grid.special();
        }
        Ok(())
    }

    /// Replay the inverse effect: steps in reverse order with each kind
    /// flipped, then the special again
    ///
    /// Special is treated as its own inverse. That holds for the set and
    /// additive stores; the sequence store's median removal is not undone
    /// by a second removal.
    pub fn undo_apply(&self, grid: &mut Grid) -> Result<()> {
        self.check_bounds(grid)?;
        trace!("undo {} ({})", self.id, self.description());
        for step in self.steps.iter().rev() {
            step.perform(grid, step.kind.inverse())?;
        }
        if self.is_special {
            grid.special();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{layer_by_name, Color};
    use crate::store::DrawStyle;

    const START: Color = Color::rgb(0, 0, 0);

    #[test]
    fn test_redo_then_undo_restores_grid() {
        let mut grid = Grid::new(DrawStyle::Add, 3, 3);
        let blank = grid.render(START, 0);
        let action = PaintAction::new()
            .with_step(PaintStep::apply(0, 0, layer_by_name("red").unwrap()))
            .with_step(PaintStep::apply(2, 1, layer_by_name("lighten").unwrap()));

        action.redo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[0][0], Color::rgb(255, 0, 0));
        assert_eq!(grid.render(START, 0)[2][1], Color::rgb(40, 40, 40));

        action.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0), blank);
    }

    #[test]
    fn test_undo_of_erase_reapplies() {
        let mut grid = Grid::new(DrawStyle::Sequence, 2, 2);
        let blue = layer_by_name("blue").unwrap();
        grid[1][1].add(blue);

        let action = PaintAction::new().with_step(PaintStep::erase(1, 1, blue));
        action.redo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[1][1], START);

        action.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[1][1], Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_undo_processes_steps_in_reverse() {
        // Forward order would re-add first (no change) and then erase
        let mut grid = Grid::new(DrawStyle::Sequence, 1, 1);
        let blue = layer_by_name("blue").unwrap();
        grid[0][0].add(blue);
        let action = PaintAction::new()
            .with_step(PaintStep::erase(0, 0, blue))
            .with_step(PaintStep::apply(0, 0, blue));

        action.redo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[0][0], Color::rgb(0, 0, 255));
        action.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[0][0], Color::rgb(0, 0, 255));
    }

    #[test]
    fn test_special_toggles_twice() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2);
        let action = PaintAction::special();
        action.redo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[0][1], Color::WHITE);
        action.undo_apply(&mut grid).unwrap();
        assert_eq!(grid.render(START, 0)[0][1], START);
    }

    #[test]
    fn test_out_of_bounds_step_leaves_grid_untouched() {
        let mut grid = Grid::new(DrawStyle::Set, 2, 2);
        let red = layer_by_name("red").unwrap();
        let action = PaintAction::with_steps(
            vec![PaintStep::apply(0, 0, red), PaintStep::apply(5, 0, red)],
            true,
        );
        let before = grid.render(START, 0);

        let err = action.redo_apply(&mut grid).unwrap_err();
        assert!(matches!(err, TesseraError::CellOutOfBounds { x: 5, .. }));
        assert_eq!(grid.render(START, 0), before);
    }

    #[test]
    fn test_description_and_emptiness() {
        assert!(PaintAction::new().is_empty());
        assert!(!PaintAction::special().is_empty());
        assert_eq!(PaintAction::special().description(), "special");
        let red = layer_by_name("red").unwrap();
        let action = PaintAction::new().with_step(PaintStep::apply(0, 0, red));
        assert_eq!(action.description(), "1 steps");
        assert_ne!(action.id(), PaintAction::new().id());
    }
}
