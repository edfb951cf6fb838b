//! Game error types.

use thiserror::Error;

/// Errors raised while setting up a game.
///
/// Guesses never fail: malformed input is scored as NaN with zero correct
/// digits.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Target range is empty.
    #[error("Invalid target range: {min}..={max}")]
    InvalidTargetRange { min: u32, max: u32 },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for GameError {
    fn from(e: toml::de::Error) -> Self {
        GameError::InvalidConfig(e.to_string())
    }
}

/// Result alias for game operations.
pub type GameResult<T> = Result<T, GameError>;
