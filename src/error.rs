//! Error types for the tic-tac-toe crate

use thiserror::Error;

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Row or column outside 0..=2
    OutOfRange,
    /// Target cell already holds a mark
    Occupied,
    /// The mark does not belong to the side to move
    WrongTurn,
    /// The round has already been won or drawn
    GameOver,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            MoveRejection::OutOfRange => "position is off the board",
            MoveRejection::Occupied => "cell is already occupied",
            MoveRejection::WrongTurn => "not this player's turn",
            MoveRejection::GameOver => "game already over",
        };
        f.write_str(text)
    }
}

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move at ({row}, {col}): {reason}")]
    InvalidMove {
        row: i32,
        col: i32,
        reason: MoveRejection,
    },

    #[error("no valid moves available")]
    NoValidMoves,
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;
