use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::{GameError, ParseBoardError};
use super::types::{BOARD_CELLS, BOARD_SIDE, Mark, Outcome};
use super::win_detector::classify;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Mark>; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.cells
    }

    pub fn mark_at(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// False for indices outside the board.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.cells.get(cell), Some(None))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn apply(&mut self, cell: usize, mark: Mark) -> Result<(), GameError> {
        match self.cells.get_mut(cell) {
            None => Err(GameError::out_of_range(cell)),
            Some(Some(_)) => Err(GameError::occupied(cell)),
            Some(slot) => {
                *slot = Some(mark);
                Ok(())
            }
        }
    }

    pub fn undo(&mut self, cell: usize) {
        if let Some(slot) = self.cells.get_mut(cell) {
            *slot = None;
        }
    }

    /// Places `mark` for the lifetime of the returned guard.
    pub fn place_scoped(&mut self, cell: usize, mark: Mark) -> Result<ScopedMove<'_>, GameError> {
        self.apply(cell, mark)?;
        Ok(ScopedMove { board: self, cell })
    }

    pub fn terminal_check(&self) -> Outcome {
        classify(&self.cells)
    }

    pub fn clear(&mut self) {
        self.cells = [None; BOARD_CELLS];
    }
}

/// A hypothetical move. Dropping the guard takes the mark back off the board.
pub struct ScopedMove<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl ScopedMove<'_> {
    pub fn cell(&self) -> usize {
        self.cell
    }
}

impl Deref for ScopedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.cell);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let symbol = cell.map(|mark| mark.symbol()).unwrap_or('.');
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Accepts `X`/`O` (either case) and `.`, `-` or `_` for empty cells.
    /// Whitespace and line breaks are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_CELLS {
            return Err(ParseBoardError::WrongLength { got: symbols.len() });
        }

        let mut board = Board::new();
        for (cell, character) in symbols.into_iter().enumerate() {
            board.cells[cell] = match character {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                _ => return Err(ParseBoardError::InvalidCharacter { character, cell }),
            };
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidMoveReason;
    use crate::tictactoe::types::WIN_PATTERNS;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..BOARD_CELLS).all(|cell| board.is_empty(cell)));
        assert_eq!(board.empty_cells(), (0..BOARD_CELLS).collect::<Vec<_>>());
        assert!(!board.is_full());
        assert_eq!(board.terminal_check(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_marks_cell() {
        let mut board = Board::new();
        board.apply(4, Mark::X).unwrap();

        assert!(!board.is_empty(4));
        assert_eq!(board.mark_at(4), Some(Mark::X));
        assert_eq!(board.empty_cells().len(), 8);
        assert!(!board.empty_cells().contains(&4));
    }

    #[test]
    fn test_apply_rejects_occupied_cell_without_change() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        let before = board;

        let result = board.apply(0, Mark::O);

        assert_eq!(
            result,
            Err(GameError::InvalidMove {
                cell: 0,
                reason: InvalidMoveReason::Occupied
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range_cell() {
        let mut board = Board::new();
        assert_eq!(board.apply(9, Mark::X), Err(GameError::out_of_range(9)));
        assert!(!board.is_empty(9));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_undo_clears_cell() {
        let mut board = Board::new();
        board.apply(2, Mark::O).unwrap();
        board.undo(2);
        assert!(board.is_empty(2));
    }

    #[test]
    fn test_scoped_move_is_retracted_on_drop() {
        let mut board = Board::new();
        {
            let probe = board.place_scoped(6, Mark::O).unwrap();
            assert_eq!(probe.mark_at(6), Some(Mark::O));
            assert_eq!(probe.cell(), 6);
        }
        assert!(board.is_empty(6));
    }

    #[test]
    fn test_nested_scoped_moves_unwind_in_order() {
        let mut board = Board::new();
        {
            let mut outer = board.place_scoped(0, Mark::X).unwrap();
            {
                let inner = outer.place_scoped(1, Mark::O).unwrap();
                assert_eq!(inner.empty_cells().len(), 7);
            }
            assert_eq!(outer.empty_cells().len(), 8);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_scoped_move_on_occupied_cell_leaves_board_alone() {
        let mut board = Board::new();
        board.apply(3, Mark::X).unwrap();
        assert!(board.place_scoped(3, Mark::O).is_err());
        assert_eq!(board.mark_at(3), Some(Mark::X));
    }

    #[test]
    fn test_top_row_scenario_wins_for_x() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        board.apply(4, Mark::O).unwrap();
        board.apply(1, Mark::X).unwrap();
        board.apply(5, Mark::O).unwrap();
        board.apply(2, Mark::X).unwrap();

        let outcome = board.terminal_check();
        assert_eq!(
            outcome,
            Outcome::Win {
                mark: Mark::X,
                pattern: WIN_PATTERNS[0]
            }
        );
        assert_eq!(board.terminal_check(), outcome);
    }

    #[test]
    fn test_filled_board_without_line_is_draw() {
        let mut board = Board::new();
        let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];
        let mut mark = Mark::X;
        for cell in moves {
            board.apply(cell, mark).unwrap();
            mark = mark.opponent();
        }

        assert!(board.is_full());
        assert_eq!(board.terminal_check(), Outcome::Draw);
    }

    #[test]
    fn test_display_and_parse_agree() {
        let board: Board = "XO.\n.X.\n..O".parse().unwrap();
        assert_eq!(board.mark_at(0), Some(Mark::X));
        assert_eq!(board.mark_at(1), Some(Mark::O));
        assert_eq!(board.mark_at(8), Some(Mark::O));
        assert_eq!(board.to_string(), "XO.\n.X.\n..O");
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::WrongLength { got: 2 })
        );
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(ParseBoardError::InvalidCharacter {
                character: '?',
                cell: 2
            })
        );
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut board: Board = "XOXOXOOXO".parse().unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }
}
