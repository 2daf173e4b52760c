mod board;
mod match_controller;
mod strategy;
mod types;
mod win_detector;

pub use board::{Board, ScopedMove};
pub use match_controller::{
    MatchController, MatchState, Opponent, PlayedMove, ScoreBoard, TurnReport,
};
pub use strategy::{
    ExhaustiveSearch, HeuristicStrategy, RandomStrategy, Strategy, StrategyKind,
    calculate_minimax_move,
};
pub use types::{BOARD_CELLS, BOARD_SIDE, Mark, Outcome, Position, WIN_PATTERNS, WinPattern};
pub use win_detector::{check_win, check_win_with_pattern};
