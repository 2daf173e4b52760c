mod heuristic;
mod minimax;
mod random;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::session_rng::SessionRng;
use super::board::Board;
use super::types::Mark;

pub use heuristic::HeuristicStrategy;
pub use minimax::{ExhaustiveSearch, calculate_minimax_move};
pub use random::RandomStrategy;

/// Picks a cell for a computer-controlled participant.
pub trait Strategy: Send {
    fn kind(&self) -> StrategyKind;

    /// Returns an empty cell for `mark` to play. `board` is left as it was
    /// passed in. Fails with [`GameError::NoLegalMove`] on a full board.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, GameError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    #[serde(alias = "easy")]
    Random,
    #[serde(alias = "medium")]
    Heuristic,
    #[serde(alias = "hard")]
    ExhaustiveSearch,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::Heuristic,
        StrategyKind::ExhaustiveSearch,
    ];

    pub fn build(self, rng: SessionRng) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(rng)),
            StrategyKind::ExhaustiveSearch => Box::new(ExhaustiveSearch),
        }
    }

    pub fn difficulty_label(&self) -> &'static str {
        match self {
            StrategyKind::Random => "Easy",
            StrategyKind::Heuristic => "Medium",
            StrategyKind::ExhaustiveSearch => "Hard",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::Random => "random",
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::ExhaustiveSearch => "exhaustive_search",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "random" | "easy" => Ok(StrategyKind::Random),
            "heuristic" | "medium" => Ok(StrategyKind::Heuristic),
            "exhaustive_search" | "exhaustive" | "minimax" | "hard" => {
                Ok(StrategyKind::ExhaustiveSearch)
            }
            other => Err(format!("Unknown strategy '{}'", other)),
        }
    }
}
