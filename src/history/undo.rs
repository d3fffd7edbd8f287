//! Undo/Redo System
//!
//! Inverse-operation undo: undoing replays an action's inverse against the
//! grid, redoing replays it forwards. Recording a new action invalidates
//! everything on the redo stack.

use std::rc::Rc;

use log::{debug, warn};

use crate::action::PaintAction;
use crate::config::DEFAULT_UNDO_CAPACITY;
use crate::containers::BoundedStack;
use crate::error::Result;
use crate::grid::Grid;

/// Manages the undo and redo stacks for one grid.
#[derive(Debug, Clone)]
pub struct UndoTracker {
    /// Applied actions, most recent on top
    history: BoundedStack<Rc<PaintAction>>,

    /// Undone actions waiting to be redone, most recently undone on top
    redone: BoundedStack<Rc<PaintAction>>,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}

impl UndoTracker {
    /// Create a tracker whose stacks each hold at most `capacity` actions.
    pub fn new(capacity: usize) -> Self {
        Self {
            history: BoundedStack::new(capacity),
            redone: BoundedStack::new(capacity),
        }
    }

    /// Record an action that has already been applied to the grid.
    ///
    /// When the history is full the action is dropped and false returned.
    /// Otherwise the redo stack is cleared, since the history has diverged.
    pub fn add_action(&mut self, action: Rc<PaintAction>) -> bool {
        if self.history.is_full() {
            warn!(
                "undo history full ({} actions), dropping {}",
                self.history.capacity(),
                action.id()
            );
            return false;
        }
        self.history.push(action);
        self.redone.clear();
        true
    }

    /// Undo the most recent action.
    ///
    /// Returns the undone action, or `None` when there is nothing to undo.
    /// If the inverse cannot be applied the action stays on the history.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<Option<Rc<PaintAction>>> {
        let Some(action) = self.history.pop() else {
            return Ok(None);
        };

        if let Err(err) = action.undo_apply(grid) {
            self.history.push(action);
            return Err(err);
        }

        debug!("undone {} ({})", action.id(), action.description());
        self.redone.push(Rc::clone(&action));
        Ok(Some(action))
    }

    /// Redo the most recently undone action.
    ///
    /// Returns the redone action, or `None` when there is nothing to redo.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<Option<Rc<PaintAction>>> {
        let Some(action) = self.redone.pop() else {
            return Ok(None);
        };

        if let Err(err) = action.redo_apply(grid) {
            self.redone.push(action);
            return Err(err);
        }

        debug!("redone {} ({})", action.id(), action.description());
        self.history.push(Rc::clone(&action));
        Ok(Some(action))
    }

    /// Get the number of actions that can be undone.
    pub fn undo_count(&self) -> usize {
        self.history.len()
    }

    /// Get the number of actions that can be redone.
    pub fn redo_count(&self) -> usize {
        self.redone.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redone.is_empty()
    }

    /// Get the most recent action that can be undone (if any).
    pub fn peek_undo(&self) -> Option<&Rc<PaintAction>> {
        self.history.peek()
    }

    /// Get the most recent action that can be redone (if any).
    pub fn peek_redo(&self) -> Option<&Rc<PaintAction>> {
        self.redone.peek()
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }
}
