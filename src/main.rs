//! Tic-tac-toe cube - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe_cube::{
    CellInput, GameReport, GameSettings, PlaySession, line_geometry, render_replay, replay_inputs,
};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let settings = GameSettings::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play => run_play(settings),
        Command::Replay { cells, json } => run_replay(settings, &cells, json),
        Command::Lines => print_json(&line_geometry()),
        Command::Schema => print_json(&schemars::schema_for!(GameReport)),
    }
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tictactoe_cube=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run the interactive loop on stdin/stdout
#[instrument(skip(settings))]
fn run_play(settings: GameSettings) -> Result<()> {
    info!("Starting interactive game");
    let mut session = PlaySession::new(settings);
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}

/// Replay cells in order and print the outcome
#[instrument(skip(settings))]
fn run_replay(settings: GameSettings, cells: &[CellInput], json: bool) -> Result<()> {
    let game = replay_inputs(settings, cells)?;
    println!("{}", render_replay(&game, json)?);
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
