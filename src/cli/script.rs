//! Session scripts
//!
//! A script is a JSON document naming a configuration and a list of
//! commands to run against a [`Session`]:
//!
//! ```json
//! {
//!   "config": { "draw_style": "ADD", "width": 8, "height": 8 },
//!   "commands": [
//!     { "op": "paint", "layer": "red", "x": 2, "y": 3 },
//!     { "op": "special" },
//!     { "op": "undo" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::error::{Result, TesseraError};
use crate::layers::{layer_by_name, Color};
use crate::session::Session;

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptCommand {
    Paint { layer: String, x: usize, y: usize },
    Erase { layer: String, x: usize, y: usize },
    Special,
    Undo,
    Redo,
    BrushUp,
    BrushDown,
}

/// A parsed script file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub config: Option<EngineConfig>,
    /// Colour every cell starts from when rendering
    pub background: Color,
    /// Timestamp passed to layer transforms when rendering
    pub timestamp: u64,
    pub commands: Vec<ScriptCommand>,
}

impl Script {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| TesseraError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Counts of what a script run actually did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    pub strokes: usize,
    pub specials: usize,
    pub undos: usize,
    pub redos: usize,
    /// Undo or redo commands that found nothing to act on
    pub ignored: usize,
}

/// Run every command in order, stopping at the first error
pub fn execute(session: &mut Session, commands: &[ScriptCommand]) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();

    for (line, command) in commands.iter().enumerate() {
        debug!("command {}: {:?}", line, command);
        match command {
            ScriptCommand::Paint { layer, x, y } => {
                session.paint(layer_by_name(layer)?, *x, *y)?;
                summary.strokes += 1;
            }
            ScriptCommand::Erase { layer, x, y } => {
                session.erase(layer_by_name(layer)?, *x, *y)?;
                summary.strokes += 1;
            }
            ScriptCommand::Special => {
                session.special();
                summary.specials += 1;
            }
            ScriptCommand::Undo => match session.undo()? {
                Some(_) => summary.undos += 1,
                None => summary.ignored += 1,
            },
            ScriptCommand::Redo => match session.redo()? {
                Some(_) => summary.redos += 1,
                None => summary.ignored += 1,
            },
            ScriptCommand::BrushUp => session.increase_brush_size(),
            ScriptCommand::BrushDown => session.decrease_brush_size(),
        }
    }

    Ok(summary)
}
