use common::config::Validate;
use common::games::tictactoe::Side;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const MAX_GAME_OVER_DELAY_MS: u64 = 10_000;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: Side,
    pub game_over_delay_ms: u64,
}

impl GameConfig {
    pub fn game_over_delay(&self) -> Duration {
        Duration::from_millis(self.game_over_delay_ms)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.game_over_delay_ms > MAX_GAME_OVER_DELAY_MS {
            return Err(format!(
                "game_over_delay_ms must not exceed {}",
                MAX_GAME_OVER_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: Side::Player,
            game_over_delay_ms: 2000,
        }
    }
}
