//! Shop error types.

use thiserror::Error;

/// Errors that can occur in shop operations.
///
/// None of these are reachable from malformed user input: bad quantities
/// default to 1 and unknown cart ids are no-ops. They cover programmer
/// mistakes, a catalog priced in another currency than the cart, and
/// broken configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopError {
    /// Catalog index out of range.
    #[error("Pizza not found at catalog index {0}")]
    PizzaNotFound(usize),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<toml::de::Error> for ShopError {
    fn from(e: toml::de::Error) -> Self {
        ShopError::InvalidConfig(e.to_string())
    }
}

/// Result alias for shop operations.
pub type ShopResult<T> = Result<T, ShopError>;
