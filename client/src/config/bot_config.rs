use common::config::{Validate, ensure_range};
use common::games::tictactoe::{BotSettings, DEFAULT_MEDIUM_OPTIMAL_PROBABILITY};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THINKING_DELAY_MS: u64 = 600;
const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BotConfig {
    pub medium_optimal_probability: f64,
    pub thinking_delay_ms: u64,
}

impl BotConfig {
    pub fn settings(&self) -> BotSettings {
        BotSettings {
            medium_optimal_probability: self.medium_optimal_probability,
        }
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<(), String> {
        ensure_range("medium_optimal_probability", self.medium_optimal_probability, 0.0, 1.0)?;
        ensure_range("thinking_delay_ms", self.thinking_delay_ms, 0, MAX_THINKING_DELAY_MS)?;
        Ok(())
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            medium_optimal_probability: DEFAULT_MEDIUM_OPTIMAL_PROBABILITY,
            thinking_delay_ms: DEFAULT_THINKING_DELAY_MS,
        }
    }
}
