//! Board structure

use super::{Cell, Pos, BOARD_SIZE, TOTAL_CELLS};

/// 3x3 game board.
///
/// `Board` is `Copy`: game-level transitions hand out new values, while the
/// search mutates a single working copy with [`Board::place`] / [`Board::remove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Build a board from rows, top to bottom
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Place a mark without any rule checks.
    /// Use `GameState::apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        self.place(pos, Cell::Empty);
    }

    /// Rows, top to bottom
    #[inline]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty positions in row-major order.
    ///
    /// The order is part of the contract: the search breaks ties by
    /// first-seen move, so it decides which of several equal moves is played.
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::with_capacity(TOTAL_CELLS);
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let pos = Pos::new(row, col);
                if self.is_empty(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_empty())
            .count()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> usize {
        TOTAL_CELLS - self.empty_count()
    }

    /// Check if every cell is taken
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.empty_count() == TOTAL_CELLS
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}
