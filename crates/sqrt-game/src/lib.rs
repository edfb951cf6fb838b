//! Square-root guessing game logic.
//!
//! The player is shown a target and types guesses at its square root. Each
//! guess is scored by how many digits after the decimal point match the true
//! root, stopping at the first wrong digit.
//!
//! - **Target**: random integer targets and the seeded starting guess
//! - **Input**: validation of the free-text boxes
//! - **Score**: prefix digit matching against the rounded root
//! - **Classify**: closeness buckets for styling
//! - **Game**: the per-session state the view layer wraps in a signal
//!
//! # Example
//!
//! ```rust
//! use sqrt_game::prelude::*;
//!
//! let mut game = SquareGame::with_target(GameConfig::default(), 113.0);
//! assert_eq!(game.input(), "10.");
//!
//! game.set_input("10.6302");
//! let guess = game.submit();
//! assert_eq!(guess.correct_digits, 3);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod game;
pub mod guess;
pub mod input;
pub mod score;
pub mod target;

pub use error::{GameError, GameResult};
pub use game::SquareGame;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::classify::{classify, GuessClass};
    pub use crate::config::{GameConfig, DEFAULT_PRECISION, ROOT_DIGITS};
    pub use crate::error::{GameError, GameResult};
    pub use crate::game::SquareGame;
    pub use crate::guess::{format_number, Guess};
    pub use crate::input::{is_valid_number, parse_guess};
    pub use crate::score::count_correct_digits;
    pub use crate::target::{actual_root, generate_target, initial_guess};
}
