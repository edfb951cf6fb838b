//! Per-session game state.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::classify::{classify, GuessClass};
use crate::config::GameConfig;
use crate::guess::Guess;
use crate::input::{parse_guess, parse_precision, parse_target};
use crate::score::count_correct_digits;
use crate::target::{actual_root, generate_target, initial_guess};

/// Square-root game session.
///
/// Holds the target, the precision goal, the text of the three input boxes
/// and the guess log. Every submission is scored against the current target
/// and appended to the log, valid or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquareGame {
    config: GameConfig,
    target: f64,
    target_text: String,
    precision: u32,
    precision_text: String,
    input: String,
    guesses: Vec<Guess>,
    guess_count: u32,
}

impl SquareGame {
    /// Start a session with a random target.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let target = generate_target(rng, config.target_min, config.target_max);
        Self::with_target(config, target)
    }

    /// Start a session with a known target.
    pub fn with_target(config: GameConfig, target: f64) -> Self {
        Self {
            precision: config.default_precision,
            precision_text: config.default_precision.to_string(),
            input: initial_guess(target),
            target_text: target.to_string(),
            target,
            guesses: Vec::new(),
            guess_count: 0,
            config,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Current text of the target box, accepted or not.
    pub fn target_text(&self) -> &str {
        &self.target_text
    }

    /// Current text of the precision box, accepted or not.
    pub fn precision_text(&self) -> &str {
        &self.precision_text
    }

    /// Current text of the guess box.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    /// Guess log in display order.
    pub fn guesses_newest_first(&self) -> impl Iterator<Item = &Guess> {
        self.guesses.iter().rev()
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn actual_root(&self) -> f64 {
        actual_root(self.target)
    }

    /// Replace the text of the guess box.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Set the target from the leading number of the target box. The text
    /// is always kept; the target only changes if a number leads.
    ///
    /// The guess log is kept; only picking a new target clears it.
    pub fn set_target_from_input(&mut self, text: &str) -> bool {
        self.target_text = text.to_string();
        match parse_target(text) {
            Some(target) => {
                debug!(new_target = target, "target edited");
                self.target = target;
                true
            }
            None => {
                debug!(text, "ignored non-numeric target");
                false
            }
        }
    }

    /// Set the precision goal from the leading integer of its box. Text
    /// without one, or with a negative one, leaves the goal unchanged.
    pub fn set_precision_from_input(&mut self, text: &str) -> bool {
        self.precision_text = text.to_string();
        match parse_precision(text) {
            Some(precision) => {
                self.precision = precision;
                true
            }
            None => {
                debug!(text, "ignored invalid precision");
                false
            }
        }
    }

    /// Score the current input and append it to the log.
    pub fn submit(&mut self) -> &Guess {
        self.guess_count += 1;

        let value = parse_guess(&self.input);
        let correct_digits =
            count_correct_digits(&self.input, value, self.actual_root(), self.config.root_digits);
        let squared = if value.is_nan() { f64::NAN } else { value * value };

        debug!(
            number = self.guess_count,
            input = %self.input,
            correct_digits,
            "guess scored"
        );

        self.guesses.push(Guess {
            number: self.guess_count,
            value: self.input.clone(),
            correct_digits,
            squared,
        });
        &self.guesses[self.guesses.len() - 1]
    }

    /// Start a new round: random target, empty log, counter at zero, and
    /// the guess box seeded with the root's integer part.
    pub fn pick_new_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let target = generate_target(rng, self.config.target_min, self.config.target_max);
        self.reset_with_target(target);
        info!(new_target = target, "new target picked");
        target
    }

    /// Start a new round with a known target.
    pub fn reset_with_target(&mut self, target: f64) {
        self.target = target;
        self.target_text = target.to_string();
        self.guesses.clear();
        self.guess_count = 0;
        self.input = initial_guess(target);
    }

    /// Styling bucket for a logged guess under the current precision goal.
    pub fn class_for(&self, guess: &Guess) -> GuessClass {
        classify(self.precision, guess.correct_digits)
    }
}

impl Default for SquareGame {
    fn default() -> Self {
        let config = GameConfig::default();
        let target = f64::from(config.target_min);
        Self::with_target(config, target)
    }
}
