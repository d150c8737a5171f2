//! Stateful cube game: placement and win checking.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::offset::Offset;
use super::rules::{self, WinLine};
use super::{CellInput, Coord, Grid, Marker};
use crate::GameSettings;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Where the game stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "state", content = "lines", rename_all = "snake_case")]
pub enum GameStatus {
    /// No line completed and cells remain.
    InProgress,
    /// One or more lines completed.
    Won(Vec<WinLine>),
    /// Grid full without a completed line.
    Draw,
}

impl GameStatus {
    /// Winning lines, empty unless won.
    pub fn win_lines(&self) -> &[WinLine] {
        match self {
            GameStatus::Won(lines) => lines,
            _ => &[],
        }
    }
}

/// An accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The move that was applied.
    pub action: Move,
    /// Game status after the move.
    pub status: GameStatus,
}

/// Board state and win checker for a 3x3x3 game.
///
/// Owns the grid and the side to move. Every accepted placement passes the
/// turn; rejected placements leave the game untouched.
#[derive(Debug, Clone)]
pub struct CubeGame {
    pub(crate) grid: Grid,
    pub(crate) to_move: Marker,
    pub(crate) history: Vec<Move>,
    settings: GameSettings,
}

impl CubeGame {
    /// Creates a game with default settings.
    #[instrument]
    pub fn new() -> Self {
        Self::with_settings(GameSettings::default())
    }

    /// Creates a game with the given settings.
    #[instrument]
    pub fn with_settings(settings: GameSettings) -> Self {
        Self {
            grid: Grid::new(),
            to_move: *settings.first_marker(),
            history: Vec::new(),
            settings,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Marker {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Empty cells, in storage order.
    pub fn valid_moves(&self) -> Vec<Coord> {
        Coord::valid_moves(&self.grid)
    }

    /// Places the current side's marker at a spatial offset.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, offset: Offset) -> Result<Placement, MoveError> {
        let Some(coord) = Coord::from_offset(offset) else {
            warn!(%offset, "Offset is not on the grid");
            return Err(MoveError::OutOfGrid(offset));
        };
        self.place_coord(coord)
    }

    /// Places the current side's marker at a grid coordinate.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place_coord(&mut self, coord: Coord) -> Result<Placement, MoveError> {
        self.make_move(Move::new(self.to_move, coord))
    }

    /// Places the current side's marker at a cell the player named.
    ///
    /// Offsets go through [`place`](Self::place), so an off-lattice triple
    /// is rejected with [`MoveError::OutOfGrid`].
    pub fn place_input(&mut self, input: CellInput) -> Result<Placement, MoveError> {
        match input {
            CellInput::Number(coord) => self.place_coord(coord),
            CellInput::Offset(offset) => self.place(offset),
        }
    }

    /// Applies an explicit move after checking the move contract.
    ///
    /// Preconditions are always checked; postconditions only in debug
    /// builds, where a failure rolls the move back.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, action: Move) -> Result<Placement, MoveError> {
        if let Err(e) = self.ensure_accepting().and_then(|()| MoveContract::pre(self, &action)) {
            warn!(error = %e, %action, "Placement rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.grid.set(action.coord, super::Cell::Occupied(action.marker));
        self.history.push(action);
        self.to_move = action.marker.opponent();

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        let status = self.status();
        debug!(%action, moves = self.history.len(), ?status, "Placement accepted");
        Ok(Placement { action, status })
    }

    fn ensure_accepting(&self) -> Result<(), MoveError> {
        if rules::is_full(&self.grid) {
            return Err(MoveError::GameOver);
        }
        if *self.settings.stop_after_win() && rules::check_winner(&self.grid).is_some() {
            return Err(MoveError::GameOver);
        }
        Ok(())
    }

    /// Every completed line, with strike geometry for rendering.
    pub fn check_win_conditions(&self) -> Vec<WinLine> {
        rules::check_win_conditions(&self.grid)
    }

    /// Current status derived from the grid.
    pub fn status(&self) -> GameStatus {
        let won = self.check_win_conditions();
        if !won.is_empty() {
            GameStatus::Won(won)
        } else if rules::is_full(&self.grid) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Rebuilds a game by applying `moves` in order.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(settings: GameSettings, moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::with_settings(settings);
        for action in moves {
            game.make_move(*action)?;
        }
        Ok(game)
    }
}

impl Default for CubeGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cube::Cell;

    fn coord(number: usize) -> Coord {
        Coord::from_number(number).unwrap()
    }

    #[test]
    fn test_place_by_offset_sets_one_cell_and_passes_turn() {
        let mut game = CubeGame::new();
        let placement = game.place(Offset::new(-24, 24, 24)).unwrap();
        assert_eq!(placement.action, Move::new(Marker::Circle, coord(1)));
        assert_eq!(placement.status, GameStatus::InProgress);
        assert_eq!(game.grid().get(coord(1)), Cell::Occupied(Marker::Circle));
        assert_eq!(game.grid().occupied(), 1);
        assert_eq!(game.to_move(), Marker::Cross);
    }

    #[test]
    fn test_off_grid_offset_rejected_without_turn_change() {
        let mut game = CubeGame::new();
        let offset = Offset::new(48, 0, 0);
        assert_eq!(game.place(offset), Err(MoveError::OutOfGrid(offset)));
        assert_eq!(game.to_move(), Marker::Circle);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_place_input_routes_offsets_through_place() {
        let mut game = CubeGame::new();
        let off = Offset::new(48, 0, 0);
        assert_eq!(
            game.place_input(CellInput::Offset(off)),
            Err(MoveError::OutOfGrid(off))
        );
        game.place_input(CellInput::Offset(Offset::new(0, 0, 0))).unwrap();
        assert_eq!(
            game.place_input(CellInput::Number(coord(14))),
            Err(MoveError::CellOccupied(coord(14)))
        );
        game.place_input(CellInput::Number(coord(1))).unwrap();
        assert_eq!(game.grid().get(coord(1)), Cell::Occupied(Marker::Cross));
    }

    #[test]
    fn test_occupied_cell_rejected_without_turn_change() {
        let mut game = CubeGame::new();
        game.place_coord(coord(14)).unwrap();
        assert_eq!(
            game.place_coord(coord(14)),
            Err(MoveError::CellOccupied(coord(14)))
        );
        assert_eq!(game.to_move(), Marker::Cross);
        assert_eq!(game.grid().get(coord(14)), Cell::Occupied(Marker::Circle));
    }

    #[test]
    fn test_make_move_rejects_wrong_player() {
        let mut game = CubeGame::new();
        let action = Move::new(Marker::Cross, coord(1));
        assert_eq!(game.make_move(action), Err(MoveError::WrongPlayer(Marker::Cross)));
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_win_reported_on_completion() {
        let mut game = CubeGame::new();
        // Circle takes the top row of the front layer, Cross the middle row.
        for number in [1, 4, 2, 5] {
            let placement = game.place_coord(coord(number)).unwrap();
            assert_eq!(placement.status, GameStatus::InProgress);
        }
        let placement = game.place_coord(coord(3)).unwrap();
        let lines = placement.status.win_lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].marker, Marker::Circle);
        assert_eq!(lines[0].line.cells, [coord(1), coord(2), coord(3)]);
    }

    #[test]
    fn test_play_continues_after_win_by_default() {
        let mut game = CubeGame::new();
        for number in [1, 4, 2, 5, 3] {
            game.place_coord(coord(number)).unwrap();
        }
        assert!(matches!(game.status(), GameStatus::Won(_)));
        assert!(game.place_coord(coord(6)).is_ok());
        // Cross now completes the middle row too.
        assert_eq!(game.check_win_conditions().len(), 2);
    }

    #[test]
    fn test_stop_after_win_rejects_further_moves() {
        let mut game = CubeGame::with_settings(GameSettings::new(Marker::Circle, true));
        for number in [1, 4, 2, 5, 3] {
            game.place_coord(coord(number)).unwrap();
        }
        assert_eq!(game.place_coord(coord(6)), Err(MoveError::GameOver));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_replay_rebuilds_state() {
        let moves = [
            Move::new(Marker::Circle, coord(14)),
            Move::new(Marker::Cross, coord(1)),
            Move::new(Marker::Circle, coord(27)),
        ];
        let game = CubeGame::replay(GameSettings::default(), &moves).unwrap();
        assert_eq!(game.history(), &moves);
        assert_eq!(game.to_move(), Marker::Cross);
        assert_eq!(game.valid_moves().len(), 24);
    }

    #[test]
    fn test_replay_stops_at_illegal_move() {
        let moves = [
            Move::new(Marker::Circle, coord(14)),
            Move::new(Marker::Cross, coord(14)),
        ];
        assert_eq!(
            CubeGame::replay(GameSettings::default(), &moves).unwrap_err(),
            MoveError::CellOccupied(coord(14))
        );
    }
}
