//! Line-oriented play session for terminal front ends.
//!
//! Reads one cell per line (a number 1-27 or an offset triple), applies it
//! to a [`CubeGame`] and writes the board plus any completed lines.

use crate::GameSettings;
use crate::games::cube::{
    CellInput, CubeGame, GameReport, GameStatus, MoveError, Placement, WinLine,
};
use derive_more::{Display, Error};
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Blank input, nothing to do.
    Idle,
    /// The player asked to leave.
    Quit,
    /// Input did not name a cell.
    Unrecognised(String),
    /// The game refused the placement.
    Rejected(MoveError),
    /// The placement was applied.
    Placed(Placement),
}

/// An interactive game bound to one [`CubeGame`].
#[derive(Debug, Clone)]
pub struct PlaySession {
    game: CubeGame,
}

impl PlaySession {
    /// Creates a session with a fresh game.
    #[instrument]
    pub fn new(settings: GameSettings) -> Self {
        info!("Creating new play session");
        Self {
            game: CubeGame::with_settings(settings),
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &CubeGame {
        &self.game
    }

    /// Handles a single line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Turn {
        let input = line.trim();
        if input.is_empty() {
            return Turn::Idle;
        }
        if matches!(input, "q" | "quit" | "exit") {
            return Turn::Quit;
        }
        let Ok(cell) = input.parse::<CellInput>() else {
            debug!(input, "Unrecognised cell");
            return Turn::Unrecognised(input.to_string());
        };
        match self.game.place_input(cell) {
            Ok(placement) => Turn::Placed(placement),
            Err(e) => Turn::Rejected(e),
        }
    }

    /// Runs the session until `q` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", self.game.grid().display())?;
        self.prompt(&mut output)?;

        for line in input.lines() {
            match self.handle_line(&line?) {
                Turn::Idle => {}
                Turn::Quit => break,
                Turn::Unrecognised(text) => {
                    writeln!(output, "Unrecognised cell '{}': enter 1-27 or x,y,z", text)?;
                }
                Turn::Rejected(e) => writeln!(output, "{}", e)?,
                Turn::Placed(placement) => {
                    writeln!(output, "{}", placement.action)?;
                    writeln!(output, "{}", self.game.grid().display())?;
                    writeln!(output, "{}", describe_status(&placement.status))?;
                }
            }
            self.prompt(&mut output)?;
        }

        info!(moves = self.game.history().len(), "Play session ended");
        Ok(())
    }

    fn prompt<W: Write>(&self, output: &mut W) -> io::Result<()> {
        write!(output, "{} to move> ", self.game.to_move())?;
        output.flush()
    }
}

/// A replayed move the game refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Move {turn} at {input} rejected")]
pub struct ReplayError {
    /// 1-based position of the move in the replay.
    pub turn: usize,
    /// The cell as given.
    pub input: CellInput,
    /// Why the game refused it.
    pub source: MoveError,
}

/// Plays `inputs` in order on a fresh game, stopping at the first refusal.
#[instrument(skip(inputs), fields(moves = inputs.len()))]
pub fn replay_inputs(
    settings: GameSettings,
    inputs: &[CellInput],
) -> Result<CubeGame, ReplayError> {
    let mut game = CubeGame::with_settings(settings);
    for (i, input) in inputs.iter().enumerate() {
        game.place_input(*input).map_err(|source| {
            warn!(turn = i + 1, %input, "Replay stopped");
            ReplayError {
                turn: i + 1,
                input: *input,
                source,
            }
        })?;
    }
    info!(status = %describe_status(&game.status()), "Replay finished");
    Ok(game)
}

/// Renders a replayed game as pretty JSON or as board, status and side to move.
pub fn render_replay(game: &CubeGame, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string_pretty(&GameReport::from_game(game));
    }
    Ok(format!(
        "{}\n{}\n{} to move",
        game.grid().display(),
        describe_status(&game.status()),
        game.to_move()
    ))
}

/// One-line summary of a completed line.
pub fn describe_win_line(win: &WinLine) -> String {
    let cells = win
        .line
        .cells
        .iter()
        .map(|c| c.number().to_string())
        .collect::<Vec<_>>()
        .join("-");
    format!(
        "{} {} line {} (strike at {})",
        win.marker, win.line.orientation, cells, win.strike.center
    )
}

/// Human-readable status, one line per winning line.
pub fn describe_status(status: &GameStatus) -> String {
    match status {
        GameStatus::InProgress => "In progress".to_string(),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::Won(lines) => {
            let plural = if lines.len() == 1 { "" } else { "s" };
            let mut text = format!("Won ({} line{})", lines.len(), plural);
            for win in lines {
                text.push_str("\n  ");
                text.push_str(&describe_win_line(win));
            }
            text
        }
    }
}
