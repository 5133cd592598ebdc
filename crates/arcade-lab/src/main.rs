//! Developer console for the game AI toolkit.
//!
//! Run with: `cargo run -p arcade-lab -- <command>`

mod commands;
mod config;
mod profiles;

use anyhow::Result;
use clap::Parser;
use commands::{Duel, Maze, Presets};
use config::LabConfig;

/// Drive the game AI toolkit from the command line
#[derive(Parser)]
#[command(name = "arcade-lab")]
#[command(about = "Play AI duels, solve mazes and inspect difficulty presets", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List difficulty presets and loaded profiles
    Presets(Presets),

    /// Pit two AI profiles against each other at tic-tac-toe
    Duel(Duel),

    /// Solve an ASCII maze and draw the path
    Maze(Maze),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LabConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Presets(cmd) => cmd.execute(&config),
        Command::Duel(cmd) => cmd.execute(&config),
        Command::Maze(cmd) => cmd.execute(),
    }
}
