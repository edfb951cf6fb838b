//! Pizza ordering logic for the storefront.
//!
//! This crate holds everything on the pizza page that is not markup:
//!
//! - **Catalog**: the static menu and the size/crust options
//! - **Cart**: line items, quantities, totals, and the pricing engine
//! - **Checkout**: order confirmation summaries
//! - **Shop**: the per-session state the view layer wraps in a signal
//!
//! # Example
//!
//! ```rust
//! use pizza_shop::prelude::*;
//!
//! let mut shop = PizzaShop::new(&ShopConfig::default());
//! shop.select_size(0, Size::Large).unwrap();
//! shop.select_crust(0, Crust::Thick).unwrap();
//! shop.add_to_cart(0).unwrap();
//!
//! assert_eq!(shop.total().unwrap().display(), "$11.00");
//!
//! let confirmation = shop.confirm_order().unwrap().unwrap();
//! assert!(confirmation.message().contains("1x Cheese"));
//! assert!(shop.cart().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod shop;

pub use error::{ShopError, ShopResult};
pub use ids::{CartItemId, IdCounter};
pub use money::{Currency, Money};
pub use shop::PizzaShop;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{ShopError, ShopResult};
    pub use crate::ids::{CartItemId, IdCounter};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Crust, Pizza, Selection, Size};

    // Cart
    pub use crate::cart::{
        parse_quantity, price_for, price_for_selection, selection_details, upcharge_badge, Cart,
        CartItem, DEFAULT_MAX_QUANTITY, MIN_QUANTITY,
    };

    // Checkout
    pub use crate::checkout::OrderConfirmation;

    pub use crate::config::ShopConfig;
    pub use crate::shop::PizzaShop;
}
