//! Game configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// Lowest target a new round can pick.
pub const DEFAULT_TARGET_MIN: u32 = 50;

/// Highest target a new round can pick.
pub const DEFAULT_TARGET_MAX: u32 = 250;

/// Digits after the decimal point the player is asked for.
pub const DEFAULT_PRECISION: u32 = 5;

/// Decimal places of the true root that guesses are compared against.
pub const ROOT_DIGITS: usize = 10;

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Inclusive lower bound for random targets.
    pub target_min: u32,
    /// Inclusive upper bound for random targets.
    pub target_max: u32,
    /// Precision goal shown when a session starts.
    pub default_precision: u32,
    /// Digits of the root used for scoring. Typed digits past this never match.
    pub root_digits: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_min: DEFAULT_TARGET_MIN,
            target_max: DEFAULT_TARGET_MAX,
            default_precision: DEFAULT_PRECISION,
            root_digits: ROOT_DIGITS,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive target range.
    pub fn with_target_range(mut self, min: u32, max: u32) -> Self {
        self.target_min = min;
        self.target_max = max;
        self
    }

    /// Set the starting precision goal.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.default_precision = precision;
        self
    }

    /// Parse from TOML and validate.
    pub fn from_toml(content: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> GameResult<()> {
        if self.target_min > self.target_max {
            return Err(GameError::InvalidTargetRange {
                min: self.target_min,
                max: self.target_max,
            });
        }
        if self.root_digits == 0 {
            return Err(GameError::InvalidConfig(
                "root_digits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
