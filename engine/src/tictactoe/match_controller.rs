use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::log;
use crate::session_rng::SessionRng;
use super::board::Board;
use super::strategy::{Strategy, StrategyKind};
use super::types::{Mark, Outcome};

/// The second seat. The first seat (`X`) is always a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Opponent {
    Human,
    Computer(StrategyKind),
}

impl fmt::Display for Opponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opponent::Human => write!(f, "human"),
            Opponent::Computer(kind) => write!(f, "{}", kind),
        }
    }
}

impl FromStr for Opponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" | "2player" | "two_players" => Ok(Opponent::Human),
            other => other
                .parse::<StrategyKind>()
                .map(Opponent::Computer)
                .map_err(|_| format!("Unknown opponent '{}'", s.trim())),
        }
    }
}

impl TryFrom<String> for Opponent {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Opponent> for String {
    fn from(opponent: Opponent) -> Self {
        opponent.to_string()
    }
}

enum Participant {
    Human,
    Computer(Box<dyn Strategy>),
}

impl Participant {
    fn bind(opponent: Opponent, rng: SessionRng) -> Self {
        match opponent {
            Opponent::Human => Participant::Human,
            Opponent::Computer(kind) => Participant::Computer(kind.build(rng)),
        }
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Human => write!(f, "Human"),
            Participant::Computer(strategy) => write!(f, "Computer({:?})", strategy.kind()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    AwaitingMove(Mark),
    Terminal(Outcome),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl ScoreBoard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Win { mark: Mark::X, .. } => self.x_wins += 1,
            Outcome::Win { mark: Mark::O, .. } => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub cell: usize,
    pub mark: Mark,
    pub by_computer: bool,
}

/// Moves applied by one request, in order, and where they left the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub moves: Vec<PlayedMove>,
    pub outcome: Outcome,
}

/// Owns the board, the turn order and the score tally for one session.
#[derive(Debug)]
pub struct MatchController {
    board: Board,
    state: MatchState,
    opponent: Opponent,
    second: Participant,
    scores: ScoreBoard,
    last_move: Option<usize>,
    seed: Option<u64>,
    matches_started: u32,
}

impl MatchController {
    pub fn new(opponent: Opponent, seed: Option<u64>) -> Self {
        let mut controller = Self {
            board: Board::new(),
            state: MatchState::AwaitingMove(Mark::FIRST),
            opponent,
            second: Participant::bind(opponent, SessionRng::from_optional_seed(seed)),
            scores: ScoreBoard::default(),
            last_move: None,
            seed,
            matches_started: 0,
        };
        controller.reset();
        controller
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn outcome(&self) -> Outcome {
        match self.state {
            MatchState::Terminal(outcome) => outcome,
            MatchState::AwaitingMove(_) => Outcome::InProgress,
        }
    }

    pub fn active_mark(&self) -> Option<Mark> {
        match self.state {
            MatchState::AwaitingMove(mark) => Some(mark),
            MatchState::Terminal(_) => None,
        }
    }

    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    pub fn is_computer(&self, mark: Mark) -> bool {
        mark != Mark::FIRST && matches!(self.second, Participant::Computer(_))
    }

    /// True when the computer has a reply pending. Presentation layers that
    /// delay the reply call [`Self::play_opponent_turn`] once they are ready.
    pub fn opponent_to_move(&self) -> bool {
        self.active_mark().is_some_and(|mark| self.is_computer(mark))
    }

    /// Plays a human move and, when the computer is up next, its reply.
    /// If the reply fails the human move is taken back as well.
    pub fn submit_move(&mut self, cell: usize) -> Result<TurnReport, GameError> {
        let last_move = self.last_move;
        let mut report = self.submit_human_move(cell)?;

        if self.opponent_to_move() {
            match self.play_opponent_turn() {
                Ok(reply) => {
                    report.moves.extend(reply.moves);
                    report.outcome = reply.outcome;
                }
                Err(e) => {
                    self.board.undo(cell);
                    self.state = MatchState::AwaitingMove(Mark::FIRST);
                    self.last_move = last_move;
                    return Err(e);
                }
            }
        }

        Ok(report)
    }

    /// Plays only the human move, leaving any computer reply pending.
    pub fn submit_human_move(&mut self, cell: usize) -> Result<TurnReport, GameError> {
        let mark = self.awaiting_mark()?;
        if self.is_computer(mark) {
            return Err(GameError::NotHumanTurn);
        }

        if let Err(e) = self.board.apply(cell, mark) {
            log!("[match:{}] Rejected {} at cell {}: {}", self.matches_started, mark, cell, e);
            return Err(e);
        }

        Ok(self.finish_move(cell, mark, false))
    }

    pub fn play_opponent_turn(&mut self) -> Result<TurnReport, GameError> {
        let mark = self.awaiting_mark()?;
        if !self.is_computer(mark) {
            return Err(GameError::OpponentNotToMove);
        }

        let Participant::Computer(strategy) = &mut self.second else {
            return Err(GameError::OpponentNotToMove);
        };

        let cell = strategy.choose_move(&self.board, mark)?;
        self.board.apply(cell, mark)?;
        log!("[match:{}] {} ({}) plays cell {}", self.matches_started, mark, strategy.kind(), cell);

        Ok(self.finish_move(cell, mark, true))
    }

    /// Clears the board for a rematch against the same opponent. Scores stay.
    pub fn reset(&mut self) {
        self.board.clear();
        self.state = MatchState::AwaitingMove(Mark::FIRST);
        self.last_move = None;
        self.matches_started += 1;
        log!("[match:{}] New match, X vs {}", self.matches_started, self.opponent);
    }

    pub fn new_match(&mut self, opponent: Opponent) {
        if opponent != self.opponent {
            self.second = Participant::bind(opponent, SessionRng::from_optional_seed(self.seed));
            self.opponent = opponent;
        }
        self.reset();
    }

    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }

    fn awaiting_mark(&self) -> Result<Mark, GameError> {
        match self.state {
            MatchState::AwaitingMove(mark) => Ok(mark),
            MatchState::Terminal(_) => Err(GameError::MatchOver),
        }
    }

    fn finish_move(&mut self, cell: usize, mark: Mark, by_computer: bool) -> TurnReport {
        self.last_move = Some(cell);
        let outcome = self.board.terminal_check();

        if outcome.is_terminal() {
            self.state = MatchState::Terminal(outcome);
            self.scores.record(&outcome);
            match outcome {
                Outcome::Win { mark, pattern } => {
                    log!("[match:{}] {} wins on {}", self.matches_started, mark, pattern)
                }
                _ => log!("[match:{}] Draw", self.matches_started),
            }
        } else {
            self.state = MatchState::AwaitingMove(mark.opponent());
        }

        TurnReport {
            moves: vec![PlayedMove {
                cell,
                mark,
                by_computer,
            }],
            outcome,
        }
    }
}
