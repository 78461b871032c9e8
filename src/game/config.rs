use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::GameError;
use crate::tween::Easing;

/// Clock settings, all in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Minimum time between two discrete moves
    pub loop_time_step: f64,
    /// Duration of each per-segment interpolation
    pub tween_time_step: f64,
    /// Curve used by segment tweens
    pub easing: Easing,
    /// Carry the time surplus of a tick into the next one instead of dropping it
    pub carry_surplus: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            loop_time_step: 500.0,
            tween_time_step: 150.0,
            easing: Easing::SineOut,
            carry_surplus: false,
        }
    }
}

/// Optional rules. All off by default: the snake roams freely and never dies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    /// End the game when the head lands on another segment
    pub self_collision: bool,
    /// End the game when the head leaves the board
    pub walls: bool,
    /// Ignore a latched direction that reverses the last applied one
    pub reject_reversal: bool,
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles per board side
    pub board_size: usize,
    /// Scale applied by renderers to grid coordinates
    pub game_scale: f32,
    /// Grid units travelled by the head per discrete move
    pub snake_speed: f32,
    /// Initial length of the snake
    pub starter_length: usize,
    /// Random food samples before falling back to a board scan
    pub max_food_attempts: usize,
    pub timing: TimingConfig,
    pub rules: GameRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: 8,
            game_scale: 2.0,
            snake_speed: 0.5,
            starter_length: 10,
            max_food_attempts: 64,
            timing: TimingConfig::default(),
            rules: GameRules::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom board size
    pub fn new(board_size: usize) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    /// Small board with a short snake, handy for tests
    pub fn small() -> Self {
        Self {
            board_size: 4,
            starter_length: 3,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded game config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Check every constant the core relies on
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig(
                "board_size must be at least 1".to_string(),
            ));
        }

        if self.starter_length == 0 {
            return Err(GameError::InvalidConfig(
                "starter_length must be at least 1".to_string(),
            ));
        }

        if !(self.snake_speed > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "snake_speed must be positive, got {}",
                self.snake_speed
            )));
        }

        if !(self.game_scale > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "game_scale must be positive, got {}",
                self.game_scale
            )));
        }

        if self.max_food_attempts == 0 {
            return Err(GameError::InvalidConfig(
                "max_food_attempts must be at least 1".to_string(),
            ));
        }

        if !(self.timing.loop_time_step > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "loop_time_step must be positive, got {}",
                self.timing.loop_time_step
            )));
        }

        if !(self.timing.tween_time_step > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "tween_time_step must be positive, got {}",
                self.timing.tween_time_step
            )));
        }

        // Overlapping tweens for one segment would snap mid-flight
        if self.timing.tween_time_step > self.timing.loop_time_step {
            return Err(GameError::InvalidConfig(format!(
                "tween_time_step ({}) cannot exceed loop_time_step ({})",
                self.timing.tween_time_step, self.timing.loop_time_step
            )));
        }

        // The starter row sits at y = -0.5 and spans starter_length tiles
        if self.rules.walls && (self.board_size < 2 || self.starter_length > self.board_size) {
            return Err(GameError::InvalidConfig(format!(
                "walls need the starter snake on the board: starter_length ({}) must not exceed \
                 board_size ({}) and board_size must be at least 2",
                self.starter_length, self.board_size
            )));
        }

        Ok(())
    }
}
