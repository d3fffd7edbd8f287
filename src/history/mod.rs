//! Action history
//!
//! Two bounded trackers drive a [`Grid`](crate::grid::Grid) through
//! [`PaintAction`](crate::action::PaintAction)s without snapshots:
//! - [`UndoTracker`]: undo and redo stacks
//! - [`ReplayTracker`]: FIFO log of everything done, for deterministic playback
//!
//! Both share actions as `Rc<PaintAction>`; an action lives until every
//! tracker holding it has dropped it.

mod replay;
mod undo;

pub use replay::{ReplayEntry, ReplayTracker};
pub use undo::UndoTracker;
