//! Draw detection and combined terminal check

use crate::board::{Board, Cell};

use super::win::{detect_winner, WinningLine};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win { winner: Cell, line: WinningLine },
    Draw,
}

/// No empty cells remain and no line is complete
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && detect_winner(board).is_none()
}

/// Terminal check: a win takes priority over a full board
pub fn check_outcome(board: &Board) -> Option<Outcome> {
    if let Some(line) = detect_winner(board) {
        let winner = line.owner(board)?;
        return Some(Outcome::Win { winner, line });
    }
    if board.is_full() {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::LineKind;
    use Cell::{Empty as E, O, X};

    #[test]
    fn test_last_cell_draw() {
        let mut board = Board::from_rows([[X, O, X], [X, O, O], [O, X, E]]);
        assert!(!is_draw(&board));

        board.place(Pos::new(2, 2), X);
        assert!(is_draw(&board));
        assert_eq!(check_outcome(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_full_board_with_winner_not_draw() {
        let board = Board::from_rows([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(!is_draw(&board));
        assert_eq!(
            check_outcome(&board),
            Some(Outcome::Win {
                winner: X,
                line: WinningLine::new(LineKind::Row, 0),
            })
        );
    }

    #[test]
    fn test_ongoing() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, E]]);
        assert!(!is_draw(&board));
        assert_eq!(check_outcome(&board), None);
    }
}
