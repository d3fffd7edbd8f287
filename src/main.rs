//! Tessera CLI
//!
//! Command-line interface for scripted painting sessions.

use clap::Parser;
use env_logger::Env;
use log::info;

use tessera::cli::commands;
use tessera::cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Tessera v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Tessera v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> anyhow::Result<()> {
    match cmd {
        Commands::Run {
            script,
            config,
            style,
            verify_replay,
            render,
        } => commands::run_script(
            &script,
            config.as_deref(),
            style.as_deref(),
            verify_replay,
            render,
        ),
        Commands::Layers => commands::list_layers(),
    }
}
