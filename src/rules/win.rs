//! Win condition checking
//!
//! A line is any of the 8 triples (3 rows, 3 columns, 2 diagonals). A line
//! wins when the magnitude of the sum of its signed cell values is 3.

use crate::board::{Board, Cell, Pos, BOARD_SIZE};

/// Which family of line a winning triple belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    Row,
    Column,
    /// Index 0 runs top-left to bottom-right, index 1 top-right to bottom-left
    Diagonal,
}

/// A line on the board, identified by kind and index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub kind: LineKind,
    pub index: u8,
}

/// All 8 lines in scan order: rows, columns, diagonals, each by index
pub const LINES: [WinningLine; 8] = [
    WinningLine::new(LineKind::Row, 0),
    WinningLine::new(LineKind::Row, 1),
    WinningLine::new(LineKind::Row, 2),
    WinningLine::new(LineKind::Column, 0),
    WinningLine::new(LineKind::Column, 1),
    WinningLine::new(LineKind::Column, 2),
    WinningLine::new(LineKind::Diagonal, 0),
    WinningLine::new(LineKind::Diagonal, 1),
];

impl WinningLine {
    pub const fn new(kind: LineKind, index: u8) -> Self {
        Self { kind, index }
    }

    /// The three positions on this line
    pub fn cells(self) -> [Pos; 3] {
        let i = self.index;
        let last = BOARD_SIZE as u8 - 1;
        match self.kind {
            LineKind::Row => [Pos::new(i, 0), Pos::new(i, 1), Pos::new(i, 2)],
            LineKind::Column => [Pos::new(0, i), Pos::new(1, i), Pos::new(2, i)],
            LineKind::Diagonal if i == 0 => [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)],
            LineKind::Diagonal => [Pos::new(0, last), Pos::new(1, 1), Pos::new(last, 0)],
        }
    }

    /// Sum of the signed cell values on this line
    #[inline]
    pub fn sum(self, board: &Board) -> i8 {
        self.cells().iter().map(|&pos| board.get(pos).value()).sum()
    }

    /// Owner of the line if all three cells hold the same mark
    #[inline]
    pub fn owner(self, board: &Board) -> Option<Cell> {
        match self.sum(board) {
            3 => Some(Cell::X),
            -3 => Some(Cell::O),
            _ => None,
        }
    }
}

/// Find the winning line, if any.
///
/// Scans every line and keeps the last one that wins, so on a contrived
/// board with several complete lines the result is the one latest in
/// [`LINES`] order. Legal alternating play never produces more than one.
pub fn detect_winner(board: &Board) -> Option<WinningLine> {
    let mut found = None;
    for line in LINES {
        if line.sum(board).abs() == 3 {
            found = Some(line);
        }
    }
    found
}

/// Check if any line is complete
#[inline]
pub fn has_winner(board: &Board) -> bool {
    LINES.iter().any(|line| line.sum(board).abs() == 3)
}

/// Check for a winner
///
/// Returns the mark owning the line reported by [`detect_winner`].
pub fn check_winner(board: &Board) -> Option<Cell> {
    detect_winner(board).and_then(|line| line.owner(board))
}
