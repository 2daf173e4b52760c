use crate::error::GameError;
use crate::tictactoe::board::Board;
use crate::tictactoe::types::{Mark, Outcome};
use super::{Strategy, StrategyKind};

const WIN_SCORE: i32 = 10;

/// Full minimax over the remaining game tree. No pruning and no cache: a
/// 3x3 board tops out below 550k nodes from the empty position.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch;

impl Strategy for ExhaustiveSearch {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExhaustiveSearch
    }

    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, GameError> {
        calculate_minimax_move(board, mark).ok_or(GameError::NoLegalMove)
    }
}

/// Best cell for `bot_mark`; ties go to the lowest index.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Option<usize> {
    let mut board = *board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for cell in board.empty_cells() {
        let Ok(mut child) = board.place_scoped(cell, bot_mark) else {
            continue;
        };
        let score = evaluate(&mut child, 0, false, bot_mark);

        if score > best_score {
            best_score = score;
            best_move = Some(cell);
        }
    }

    best_move
}

fn evaluate(board: &mut Board, depth: i32, is_maximizing: bool, bot_mark: Mark) -> i32 {
    match board.terminal_check() {
        Outcome::Win { mark, .. } if mark == bot_mark => return WIN_SCORE - depth,
        Outcome::Win { .. } => return depth - WIN_SCORE,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    let to_play = if is_maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    for cell in board.empty_cells() {
        let Ok(mut child) = board.place_scoped(cell, to_play) else {
            continue;
        };
        let score = evaluate(&mut child, depth + 1, !is_maximizing, bot_mark);
        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}
