use crate::error::GameError;
use crate::session_rng::SessionRng;
use crate::tictactoe::board::Board;
use crate::tictactoe::types::Mark;
use super::{Strategy, StrategyKind};

#[derive(Debug)]
pub struct RandomStrategy {
    rng: SessionRng,
}

impl RandomStrategy {
    pub fn new(rng: SessionRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Random
    }

    fn choose_move(&mut self, board: &Board, _mark: Mark) -> Result<usize, GameError> {
        pick_random_empty(board, &mut self.rng)
    }
}

pub(super) fn pick_random_empty(board: &Board, rng: &mut SessionRng) -> Result<usize, GameError> {
    rng.choose(&board.empty_cells()).ok_or(GameError::NoLegalMove)
}
