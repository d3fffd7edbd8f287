//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use anyhow::{bail, Context};
use log::{info, warn};

use crate::config::EngineConfig;
use crate::layers::catalog;
use crate::session::Session;
use crate::store::DrawStyle;

use super::script::{execute, Script};

/// Run a script and print the resulting grid fingerprint.
pub fn run_script(
    path: &Path,
    config_path: Option<&Path>,
    style: Option<&str>,
    verify_replay: bool,
    render: bool,
) -> anyhow::Result<()> {
    info!("Running script: {}", path.display());

    let script = Script::from_file(path)
        .with_context(|| format!("loading script {}", path.display()))?;

    let mut config = match config_path {
        Some(config_path) => EngineConfig::from_file(config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?,
        None => script.config.clone().unwrap_or_default(),
    };
    if let Some(style) = style {
        config.draw_style = style.parse::<DrawStyle>()?;
    }

    let mut session = Session::new(config)?;
    let summary = execute(&mut session, &script.commands)?;
    let grid = session.grid();

    println!(
        "Grid: {}x{} {} (brush {})",
        grid.width(),
        grid.height(),
        grid.draw_style(),
        grid.brush_size()
    );
    println!(
        "Strokes: {} | Specials: {} | Undos: {} | Redos: {} | Ignored: {}",
        summary.strokes, summary.specials, summary.undos, summary.redos, summary.ignored
    );
    println!(
        "Undo stack: {} | Redo stack: {} | Replay log: {}",
        session.undo_tracker().undo_count(),
        session.undo_tracker().redo_count(),
        session.replay_tracker().len()
    );

    let fingerprint = grid.fingerprint(script.background, script.timestamp);
    println!("Fingerprint: {}", fingerprint);

    if render {
        let colors = grid.render(script.background, script.timestamp);
        println!("{:-<60}", "");
        for y in 0..grid.height() {
            let line: Vec<String> = colors.iter().map(|column| column[y].to_string()).collect();
            println!("{}", line.join(" "));
        }
        println!("{:-<60}", "");
    }

    if verify_replay {
        let replayed = session.replay()?;
        let replayed_fingerprint = replayed.fingerprint(script.background, script.timestamp);
        if replayed_fingerprint != fingerprint {
            warn!("replay diverged: {}", replayed_fingerprint);
            bail!(
                "replay produced {} but the live grid is {}",
                replayed_fingerprint,
                fingerprint
            );
        }
        println!("Replay verified.");
    }

    Ok(())
}

/// List the built-in layers in catalog order.
pub fn list_layers() -> anyhow::Result<()> {
    println!("Built-in layers:");
    println!("{:-<60}", "");
    for layer in catalog() {
        println!("{:>3}  {}", layer.index, layer.name);
    }
    Ok(())
}
