use common::config::Validate;
use common::games::tictactoe::{FirstPlayerMode, GameMode};
use serde::{Deserialize, Serialize};

pub const MAX_BOT_DELAY_MS: u32 = 5000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct GameConfig {
    /// Skips the start menu when set.
    pub mode: Option<GameMode>,
    pub first_player: FirstPlayerMode,
    pub bot_delay_ms: u32,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "bot_delay_ms must not exceed {}",
                MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: None,
            first_player: FirstPlayerMode::Human,
            bot_delay_ms: 500,
        }
    }
}
