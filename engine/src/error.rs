use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    #[error("cell is outside the board")]
    OutOfRange,
    #[error("cell is already marked")]
    Occupied,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move at cell {cell}: {reason}")]
    InvalidMove {
        cell: usize,
        reason: InvalidMoveReason,
    },

    /// A strategy was asked to move on a full board. The match controller
    /// never does this, so seeing it means a caller broke the contract.
    #[error("no legal move available")]
    NoLegalMove,

    #[error("match is already over")]
    MatchOver,

    #[error("waiting for the opponent to move")]
    NotHumanTurn,

    #[error("no computer opponent is waiting to move")]
    OpponentNotToMove,
}

impl GameError {
    pub fn out_of_range(cell: usize) -> Self {
        GameError::InvalidMove {
            cell,
            reason: InvalidMoveReason::OutOfRange,
        }
    }

    pub fn occupied(cell: usize) -> Self {
        GameError::InvalidMove {
            cell,
            reason: InvalidMoveReason::Occupied,
        }
    }

    pub fn is_invalid_move(&self) -> bool {
        matches!(self, GameError::InvalidMove { .. })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {got}")]
    WrongLength { got: usize },

    #[error("invalid character '{character}' at cell {cell}")]
    InvalidCharacter { character: char, cell: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write settings file {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings: {0}")]
    Parse(#[source] serde_yaml_ng::Error),

    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}
