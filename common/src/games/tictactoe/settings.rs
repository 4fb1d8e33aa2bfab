use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::types::Player;
use crate::config::Validate;

pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    #[default]
    Human,
    Computer,
}

impl FirstPlayer {
    pub fn player(&self) -> Player {
        match self {
            FirstPlayer::Human => Player::HUMAN,
            FirstPlayer::Computer => Player::COMPUTER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub first_player: FirstPlayer,
    pub thinking_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must not exceed {} (got {})",
                MAX_THINKING_DELAY_MS, self.thinking_delay_ms
            ));
        }
        Ok(())
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            thinking_delay_ms: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.thinking_delay(), Duration::from_millis(500));
        assert_eq!(settings.first_player.player(), Player::X);
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let settings = TicTacToeSettings {
            thinking_delay_ms: MAX_THINKING_DELAY_MS + 1,
            ..TicTacToeSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("thinking_delay_ms"));
    }
}
