use serde::{Deserialize, Serialize};

use crate::tictactoe::{Opponent, StrategyKind};
use super::Validate;

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MatchSettings {
    #[serde(default = "default_opponent")]
    pub opponent: Opponent,
    #[serde(default = "default_bot_delay_ms")]
    pub bot_delay_ms: u64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_opponent() -> Opponent {
    Opponent::Computer(StrategyKind::ExhaustiveSearch)
}

fn default_bot_delay_ms() -> u64 {
    DEFAULT_BOT_DELAY_MS
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            opponent: default_opponent(),
            bot_delay_ms: default_bot_delay_ms(),
            seed: None,
        }
    }
}

impl Validate for MatchSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms ({}) must not exceed {}",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}
