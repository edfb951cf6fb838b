//! Checkout module.

mod order;

pub use order::{OrderConfirmation, CONFIRMATION_HEADING, THANK_YOU_LINE};
