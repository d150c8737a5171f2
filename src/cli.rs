//! Command-line interface for tictactoe_cube.

use clap::{Parser, Subcommand};
use tictactoe_cube::CellInput;

/// Tic-tac-toe cube - play and inspect 3x3x3 games
#[derive(Parser, Debug)]
#[command(name = "tictactoe_cube")]
#[command(about = "Board state and win detection for 3x3x3 tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "cube.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one cell per line on stdin
    Play,

    /// Replay a sequence of cells and print the result
    ///
    /// Offsets that start with '-' must follow '--', as in
    /// `replay --json -- -24,24,24 14`.
    Replay {
        /// Cells in play order: numbers 1-27 or offsets like "0,24,-24"
        #[arg(required = true)]
        cells: Vec<CellInput>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every candidate line with its strike geometry as JSON
    Lines,

    /// Print the JSON Schema of the replay report
    Schema,
}
