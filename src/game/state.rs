//! Game state value and move application

use crate::board::{Board, Cell, Pos, TOTAL_CELLS};
use crate::error::{Error, MoveRejection, Result};
use crate::rules::{check_outcome, Outcome};

/// Whether the round is still being played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ongoing,
    Over(Outcome),
}

/// State of one round.
///
/// A `GameState` is a plain value: [`GameState::apply_move`] leaves `self`
/// untouched and returns the successor, so there is no hidden state shared
/// between operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Cell,
    moves_left: u8,
    status: Status,
    last_move: Option<Pos>,
}

impl GameState {
    /// Fresh round with `first` to move
    pub fn new(first: Cell) -> Self {
        debug_assert!(!first.is_empty());
        Self {
            board: Board::new(),
            turn: first,
            moves_left: TOTAL_CELLS as u8,
            status: Status::Ongoing,
            last_move: None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move
    #[inline]
    pub fn turn(&self) -> Cell {
        self.turn
    }

    #[inline]
    pub fn moves_left(&self) -> u8 {
        self.moves_left
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Over(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Over(outcome) => Some(outcome),
            Status::Ongoing => None,
        }
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.board.empty_cells()
    }

    /// Place `player` at (`row`, `col`) and return the next state.
    ///
    /// On success the cell is set, `moves_left` drops by one and the turn
    /// passes to the opponent. The round ends when a line is completed or
    /// the last cell is filled.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMove`] if the round is over, `player` is not the side
    /// to move, the indices are outside 0..=2, or the cell is taken. `self`
    /// is unchanged in every case.
    pub fn apply_move(&self, row: i32, col: i32, player: Cell) -> Result<GameState> {
        let reject = |reason| Error::InvalidMove { row, col, reason };

        if self.is_over() {
            return Err(reject(MoveRejection::GameOver));
        }
        if player != self.turn {
            return Err(reject(MoveRejection::WrongTurn));
        }
        let pos = Pos::try_new(row, col).ok_or_else(|| reject(MoveRejection::OutOfRange))?;
        if !self.board.is_empty(pos) {
            return Err(reject(MoveRejection::Occupied));
        }

        let mut next = *self;
        next.board.place(pos, player);
        next.moves_left -= 1;
        next.turn = player.opponent();
        next.last_move = Some(pos);
        if let Some(outcome) = check_outcome(&next.board) {
            next.status = Status::Over(outcome);
        }
        Ok(next)
    }

    /// Play the side to move at `pos`
    pub fn play(&self, pos: Pos) -> Result<GameState> {
        self.apply_move(pos.row as i32, pos.col as i32, self.turn)
    }
}
