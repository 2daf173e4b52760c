use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::tictactoe::board::Board;
use crate::tictactoe::types::Mark;
use super::random::pick_random_empty;
use super::{Strategy, StrategyKind};

/// One-ply lookahead: win if possible, else block, else play randomly.
///
/// Only the lowest-indexed opponent win is blocked, so a double threat beats
/// it. That is what separates this tier from [`super::ExhaustiveSearch`].
#[derive(Debug)]
pub struct HeuristicStrategy {
    rng: SessionRng,
}

impl HeuristicStrategy {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl Strategy for HeuristicStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Heuristic
    }

    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, GameError> {
        let mut scratch = *board;

        if let Some(cell) = find_winning_move(&mut scratch, mark) {
            return Ok(cell);
        }

        if let Some(cell) = find_winning_move(&mut scratch, mark.opponent()) {
            return Ok(cell);
        }

        pick_random_empty(board, &mut self.rng)
    }
}

fn find_winning_move(board: &mut Board, mark: Mark) -> Option<usize> {
    for cell in board.empty_cells() {
        let Ok(probe) = board.place_scoped(cell, mark) else {
            continue;
        };
        if probe.terminal_check().is_win_for(mark) {
            return Some(cell);
        }
    }
    None
}
