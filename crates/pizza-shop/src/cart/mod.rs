//! Shopping cart module.
//!
//! Contains the cart, its line items, and the pricing engine.

mod cart;
mod pricing;

pub use cart::{parse_quantity, Cart, CartItem, DEFAULT_MAX_QUANTITY, MIN_QUANTITY};
pub use pricing::{price_for, price_for_selection, selection_details, upcharge_badge};
