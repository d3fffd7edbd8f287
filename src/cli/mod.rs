//! CLI Module
//!
//! Command-line interface for running scripted painting sessions.

pub mod commands;
pub mod script;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tessera - layer compositing with undo, redo and replay
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a JSON script of paint/erase/special/undo/redo commands
    #[command(name = "run")]
    Run {
        /// Path to the script
        script: PathBuf,

        /// Engine configuration file (overrides the script's config)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Draw style override: SET, ADD or SEQUENCE
        #[arg(short, long)]
        style: Option<String>,

        /// Replay the recorded log onto a fresh grid and compare
        #[arg(long)]
        verify_replay: bool,

        /// Print the rendered grid
        #[arg(long)]
        render: bool,
    },

    /// List the built-in layers
    #[command(name = "layers")]
    Layers,
}
