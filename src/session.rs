//! Painting session
//!
//! Wires a grid to its undo tracker and replay log the way an interactive
//! front end drives them:
//! - paint, erase and special are applied, then recorded in both trackers
//! - an undo that happened is logged for replay as an undo event
//! - a redo that happened is logged for replay as a forward event
//!
//! Replaying the log onto a fresh grid must reproduce the live grid.

use std::rc::Rc;

use log::debug;

use crate::action::PaintAction;
use crate::brush;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::grid::Grid;
use crate::history::{ReplayTracker, UndoTracker};
use crate::layers::Layer;

#[derive(Debug, Clone)]
pub struct Session {
    config: EngineConfig,
    grid: Grid,
    undo: UndoTracker,
    replay: ReplayTracker,
}

impl Session {
    /// Start a session on a blank grid built from `config`
    pub fn new(config: EngineConfig) -> Result<Self> {
        let grid = Grid::from_config(&config)?;
        Ok(Self {
            undo: UndoTracker::new(config.undo_capacity),
            replay: ReplayTracker::new(config.replay_capacity),
            grid,
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn undo_tracker(&self) -> &UndoTracker {
        &self.undo
    }

    pub fn replay_tracker(&self) -> &ReplayTracker {
        &self.replay
    }

    /// Paint `layer` with the current brush around `(x, y)`
    pub fn paint(&mut self, layer: Layer, x: usize, y: usize) -> Result<Rc<PaintAction>> {
        let action = Rc::new(brush::paint(&mut self.grid, layer, x, y)?);
        self.record(&action);
        Ok(action)
    }

    /// Erase with `layer` using the current brush around `(x, y)`
    pub fn erase(&mut self, layer: Layer, x: usize, y: usize) -> Result<Rc<PaintAction>> {
        let action = Rc::new(brush::erase(&mut self.grid, layer, x, y)?);
        self.record(&action);
        Ok(action)
    }

    /// Grid-wide special
    pub fn special(&mut self) -> Rc<PaintAction> {
        let action = Rc::new(brush::special(&mut self.grid));
        self.record(&action);
        action
    }

    pub fn undo(&mut self) -> Result<Option<Rc<PaintAction>>> {
        let undone = self.undo.undo(&mut self.grid)?;
        if let Some(action) = &undone {
            self.replay.add_action(Rc::clone(action), true);
        }
        Ok(undone)
    }

    pub fn redo(&mut self) -> Result<Option<Rc<PaintAction>>> {
        let redone = self.undo.redo(&mut self.grid)?;
        if let Some(action) = &redone {
            self.replay.add_action(Rc::clone(action), false);
        }
        Ok(redone)
    }

    pub fn increase_brush_size(&mut self) {
        self.grid.increase_brush_size();
    }

    pub fn decrease_brush_size(&mut self) {
        self.grid.decrease_brush_size();
    }

    /// Play the whole replay log onto a fresh grid and return it
    ///
    /// The live log is left intact.
    pub fn replay(&self) -> Result<Grid> {
        let mut grid = Grid::from_config(&self.config)?;
        let mut log = self.replay.clone();
        log.start_replay();
        while !log.play_next_action(&mut grid)? {}
        Ok(grid)
    }

    /// Strokes that changed nothing are not worth an undo level
    fn record(&mut self, action: &Rc<PaintAction>) {
        if action.is_empty() {
            debug!("stroke changed nothing, not recorded");
            return;
        }
        self.undo.add_action(Rc::clone(action));
        self.replay.add_action(Rc::clone(action), false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{layer_by_name, Color};
    use crate::store::DrawStyle;

    fn session(style: DrawStyle) -> Session {
        Session::new(EngineConfig::new(style, 6, 6)).unwrap()
    }

    #[test]
    fn test_records_into_both_trackers() {
        let mut session = session(DrawStyle::Set);
        session.paint(layer_by_name("red").unwrap(), 2, 2).unwrap();
        session.special();
        assert_eq!(session.undo_tracker().undo_count(), 2);
        assert_eq!(session.replay_tracker().len(), 2);
    }

    #[test]
    fn test_noop_stroke_not_recorded() {
        let mut session = session(DrawStyle::Set);
        let red = layer_by_name("red").unwrap();
        session.paint(red, 2, 2).unwrap();
        let repeat = session.paint(red, 2, 2).unwrap();
        assert!(repeat.is_empty());
        assert_eq!(session.undo_tracker().undo_count(), 1);
    }

    #[test]
    fn test_undo_redo_logged_for_replay() {
        let mut session = session(DrawStyle::Add);
        session.paint(layer_by_name("blue").unwrap(), 1, 1).unwrap();
        session.undo().unwrap();
        session.redo().unwrap();
        let undo_flags: Vec<bool> = session
            .replay_tracker()
            .entries()
            .map(|entry| entry.is_undo)
            .collect();
        assert_eq!(undo_flags, vec![false, true, false]);

        // nothing left to undo twice over: second undo is not logged
        session.undo().unwrap();
        assert!(session.undo().unwrap().is_none());
        assert_eq!(session.replay_tracker().len(), 4);
    }

    #[test]
    fn test_replay_matches_live_grid() {
        let mut session = session(DrawStyle::Sequence);
        session.paint(layer_by_name("lighten").unwrap(), 0, 0).unwrap();
        session.paint(layer_by_name("red").unwrap(), 3, 3).unwrap();
        session.erase(layer_by_name("lighten").unwrap(), 1, 0).unwrap();
        session.undo().unwrap();
        session.special();

        let replayed = session.replay().unwrap();
        assert_eq!(
            replayed.render(Color::BLACK, 9),
            session.grid().render(Color::BLACK, 9)
        );
        assert_eq!(session.replay_tracker().len(), 5);
    }
}
