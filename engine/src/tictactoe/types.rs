use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIDE: usize = 3;
pub const BOARD_CELLS: usize = BOARD_SIDE * BOARD_SIDE;

/// The symbol a participant plays. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const FIRST: Mark = Mark::X;

    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    fn of_cell(cell: usize) -> Self {
        Self::new(cell / BOARD_SIDE, cell % BOARD_SIDE)
    }
}

/// Three cell indices that win when they hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinPattern([usize; 3]);

impl WinPattern {
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub fn start(&self) -> Position {
        Position::of_cell(self.0[0])
    }

    pub fn end(&self) -> Position {
        Position::of_cell(self.0[2])
    }
}

impl fmt::Display for WinPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// Rows, then columns, then the two diagonals. Order decides which line is
/// reported when several complete at once.
pub const WIN_PATTERNS: [WinPattern; 8] = [
    WinPattern::new([0, 1, 2]),
    WinPattern::new([3, 4, 5]),
    WinPattern::new([6, 7, 8]),
    WinPattern::new([0, 3, 6]),
    WinPattern::new([1, 4, 7]),
    WinPattern::new([2, 5, 8]),
    WinPattern::new([0, 4, 8]),
    WinPattern::new([2, 4, 6]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win { mark: Mark, pattern: WinPattern },
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    pub fn is_win_for(&self, mark: Mark) -> bool {
        self.winner() == Some(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips_mark() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::FIRST, Mark::X);
    }

    #[test]
    fn test_win_pattern_endpoints() {
        let diagonal = WIN_PATTERNS[7];
        assert_eq!(diagonal.cells(), [2, 4, 6]);
        assert_eq!(diagonal.start(), Position::new(0, 2));
        assert_eq!(diagonal.end(), Position::new(2, 0));

        let middle_column = WIN_PATTERNS[4];
        assert_eq!(middle_column.start(), Position::new(0, 1));
        assert_eq!(middle_column.end(), Position::new(2, 1));
    }
}
