//! Cart item identifiers.
//!
//! Ids are handed out by an [`IdCounter`] owned by the shop session, so
//! they increase monotonically and are never reused, even after the item
//! they named was removed or the cart was cleared by an order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a line in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CartItemId(u64);

impl CartItemId {
    /// Wrap a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// DOM id of the quantity input for this line (e.g., "qty-3").
    pub fn input_id(&self) -> String {
        format!("qty-{}", self.0)
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CartItemId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Monotonic id source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next id.
    pub fn next_id(&mut self) -> CartItemId {
        let id = CartItemId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let mut counter = IdCounter::new();
        assert_eq!(counter.next_id(), CartItemId::new(0));
        assert_eq!(counter.next_id(), CartItemId::new(1));
    }

    #[test]
    fn test_counter_is_monotonic() {
        let mut counter = IdCounter::new();
        let ids: Vec<_> = (0..5).map(|_| counter.next_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_input_id() {
        assert_eq!(CartItemId::new(7).input_id(), "qty-7");
        assert_eq!(format!("{}", CartItemId::new(7)), "7");
    }
}
