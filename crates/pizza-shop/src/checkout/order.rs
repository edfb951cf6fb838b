//! Order confirmation.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::error::ShopResult;
use crate::money::Money;

/// Heading of the confirmation banner.
pub const CONFIRMATION_HEADING: &str = "Order Confirmed!";

/// Closing line of the confirmation banner.
pub const THANK_YOU_LINE: &str = "Thank you for your order!";

/// Snapshot of a confirmed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderConfirmation {
    /// One summary line per cart line, in cart order.
    pub lines: Vec<String>,
    /// Cart total at confirmation time.
    pub total: Money,
}

impl OrderConfirmation {
    /// Build a confirmation from the cart. Returns `Ok(None)` when the total
    /// is zero, which is the case for an empty cart.
    pub fn from_cart(cart: &Cart) -> ShopResult<Option<Self>> {
        let total = cart.total()?;
        if total.is_zero() {
            return Ok(None);
        }

        Ok(Some(Self {
            lines: cart.items.iter().map(|item| item.summary_line()).collect(),
            total,
        }))
    }

    /// The multi-line banner text shown to the customer.
    pub fn message(&self) -> String {
        format!(
            "{}\n{}\nTotal: {}\n\n{}",
            CONFIRMATION_HEADING,
            self.lines.join("\n"),
            self.total.display(),
            THANK_YOU_LINE
        )
    }
}
