//! Replay log
//!
//! Every action performed (and every undo or redo of one) is appended here
//! in order. Playing the log back against a fresh grid rebuilds the grid
//! state step by step.

use std::rc::Rc;

use log::{debug, info, warn};

use crate::action::PaintAction;
use crate::config::DEFAULT_REPLAY_CAPACITY;
use crate::containers::BoundedQueue;
use crate::error::Result;
use crate::grid::Grid;

/// One recorded history event
#[derive(Debug, Clone)]
pub struct ReplayEntry {
    pub action: Rc<PaintAction>,
    /// Play the action's inverse instead of its forward effect
    pub is_undo: bool,
}

/// Bounded FIFO of actions for deterministic playback
#[derive(Debug, Clone)]
pub struct ReplayTracker {
    actions: BoundedQueue<ReplayEntry>,
    replaying: bool,
}

impl Default for ReplayTracker {
    fn default() -> Self {
        Self::new(DEFAULT_REPLAY_CAPACITY)
    }
}

impl ReplayTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            actions: BoundedQueue::new(capacity),
            replaying: false,
        }
    }

    /// Append an event to the log.
    ///
    /// `is_undo` is true only for undo events; paints, specials and redos
    /// all replay forwards. Returns false when the log is full.
    pub fn add_action(&mut self, action: Rc<PaintAction>, is_undo: bool) -> bool {
        let queued = self.actions.append(ReplayEntry { action, is_undo });
        if !queued {
            warn!(
                "replay log full ({} entries), event not recorded",
                self.actions.capacity()
            );
        }
        queued
    }

    /// Mark the switch from recording to playback.
    pub fn start_replay(&mut self) {
        info!("starting replay of {} events", self.actions.len());
        self.replaying = true;
    }

    pub fn is_replaying(&self) -> bool {
        self.replaying
    }

    /// Play the oldest queued event against `grid`.
    ///
    /// Returns true when the log was already empty and nothing happened,
    /// false after playing one event. An event that fails to apply stays
    /// at the head of the log. Draining the log ends playback.
    pub fn play_next_action(&mut self, grid: &mut Grid) -> Result<bool> {
        let Some(entry) = self.actions.peek() else {
            if self.replaying {
                info!("replay finished");
                self.replaying = false;
            }
            return Ok(true);
        };

        if entry.is_undo {
            entry.action.undo_apply(grid)?;
        } else {
            entry.action.redo_apply(grid)?;
        }
        debug!(
            "replayed {}{}",
            if entry.is_undo { "undo of " } else { "" },
            entry.action.id()
        );

        self.actions.serve();
        Ok(false)
    }

    /// Queued events, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &ReplayEntry> + '_ {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
