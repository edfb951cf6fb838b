//! Cart and line item types.

use crate::cart::pricing::price_for;
use crate::catalog::{Crust, Size};
use crate::error::ShopResult;
use crate::ids::CartItemId;
use crate::money::{Currency, Money};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Smallest quantity a line can hold.
pub const MIN_QUANTITY: i64 = 1;

/// Default cap on the quantity of a single line.
pub const DEFAULT_MAX_QUANTITY: i64 = 99;

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
    /// Cart currency.
    pub currency: Currency,
    /// Upper bound applied by `update_quantity`.
    pub max_quantity: i64,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency, max_quantity: i64) -> Self {
        Self {
            items: Vec::new(),
            currency,
            max_quantity: max_quantity.max(MIN_QUANTITY),
        }
    }

    /// Append a line. Identical configurations stay separate lines.
    ///
    /// Lines priced in another currency are rejected.
    pub fn push(&mut self, item: CartItem) -> ShopResult<()> {
        item.unit_price.ensure_currency(self.currency)?;
        self.items.push(item);
        Ok(())
    }

    /// Set a line's quantity, clamped to `[MIN_QUANTITY, max_quantity]`.
    ///
    /// Returns false if no line has this id.
    pub fn update_quantity(&mut self, id: CartItemId, quantity: i64) -> bool {
        let quantity = quantity.clamp(MIN_QUANTITY, self.max_quantity);
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, id: CartItemId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of unit price times quantity over every line.
    pub fn total(&self) -> ShopResult<Money> {
        let line_totals: Vec<Money> = self.items.iter().map(CartItem::line_total).collect();
        Money::checked_sum(&line_totals, self.currency)
    }

    /// Get total pizza count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get an item by ID.
    pub fn get_item(&self, id: CartItemId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default(), DEFAULT_MAX_QUANTITY)
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: CartItemId,
    /// Pizza name (denormalized for display).
    pub name: String,
    pub base_price: Money,
    pub size: Size,
    pub crust: Crust,
    /// Base price plus upcharges, fixed when the line was added.
    pub unit_price: Money,
    pub quantity: i64,
}

impl CartItem {
    /// Create a line with quantity 1, pricing it from the chosen options.
    pub fn new(
        id: CartItemId,
        name: impl Into<String>,
        base_price: Money,
        size: Size,
        crust: Crust,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            base_price,
            size,
            crust,
            unit_price: price_for(base_price, size, crust),
            quantity: MIN_QUANTITY,
        }
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_multiply(self.quantity)
    }

    /// Summary line used in the order confirmation, e.g. "2x Cheese — $16.00".
    pub fn summary_line(&self) -> String {
        format!(
            "{}x {} \u{2014} {}",
            self.quantity,
            self.name,
            self.line_total().display()
        )
    }
}

/// Parse the raw text of a quantity input from its leading integer, so
/// "2.5" is 2 and "3abc" is 3. Text with no leading digits becomes 1.
pub fn parse_quantity(raw: &str) -> i64 {
    static LEADING_INTEGER: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_INTEGER
        .get_or_init(|| Regex::new(r"^\s*[+-]?[0-9]+").expect("quantity pattern is valid"));

    let Some(found) = re.find(raw) else {
        return MIN_QUANTITY;
    };
    let digits = found.as_str().trim_start();
    // Overlong digit runs saturate.
    let saturated = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
    digits.parse().unwrap_or(saturated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, base_units: i64, size: Size, crust: Crust) -> CartItem {
        CartItem::new(
            CartItemId::new(id),
            name,
            Money::units(base_units, Currency::USD),
            size,
            crust,
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::default();
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
        assert_eq!(cart.max_quantity, DEFAULT_MAX_QUANTITY);
    }

    #[test]
    fn test_new_item_is_priced() {
        let line = item(0, "Cheese", 8, Size::Large, Crust::Thick);
        assert_eq!(line.quantity, 1);
        assert_eq!(line.unit_price.amount_cents, 1100);
    }

    #[test]
    fn test_duplicate_configurations_stay_separate() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();
        cart.push(item(1, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();
        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_push_rejects_foreign_currency() {
        let mut cart = Cart::default();
        let euro = CartItem::new(
            CartItemId::new(0),
            "Cheese",
            Money::units(8, Currency::EUR),
            Size::Small,
            Crust::Regular,
        );
        assert!(matches!(
            cart.push(euro),
            Err(crate::error::ShopError::CurrencyMismatch { .. })
        ));
        assert!(cart.is_empty());
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();

        assert!(cart.update_quantity(CartItemId::new(0), 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().unwrap().amount_cents, 4000);
    }

    #[test]
    fn test_update_quantity_clamps() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();

        cart.update_quantity(CartItemId::new(0), 0);
        assert_eq!(cart.get_item(CartItemId::new(0)).unwrap().quantity, 1);

        cart.update_quantity(CartItemId::new(0), -4);
        assert_eq!(cart.get_item(CartItemId::new(0)).unwrap().quantity, 1);

        cart.update_quantity(CartItemId::new(0), 1000);
        assert_eq!(cart.get_item(CartItemId::new(0)).unwrap().quantity, 99);
    }

    #[test]
    fn test_update_quantity_unknown_id() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();

        assert!(!cart.update_quantity(CartItemId::new(42), 3));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Small, Crust::Regular)).unwrap();
        cart.push(item(1, "Hawaiian", 10, Size::Medium, Crust::Thin)).unwrap();

        assert!(cart.remove_item(CartItemId::new(0)));
        assert!(!cart.remove_item(CartItemId::new(0)));
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].name, "Hawaiian");
    }

    #[test]
    fn test_total() {
        let mut cart = Cart::default();
        cart.push(item(0, "Cheese", 8, Size::Large, Crust::Thick)).unwrap(); // 11.00
        cart.push(item(1, "Pepperoni", 9, Size::Medium, Crust::Regular)).unwrap(); // 10.00
        cart.update_quantity(CartItemId::new(1), 3);

        assert_eq!(cart.total().unwrap().amount_cents, 1100 + 3 * 1000);
    }

    #[test]
    fn test_summary_line() {
        let mut line = item(0, "Cheese", 8, Size::Small, Crust::Regular);
        line.quantity = 2;
        assert_eq!(line.summary_line(), "2x Cheese \u{2014} $16.00");
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("."), 1);
        assert_eq!(parse_quantity("2.5"), 2);
        assert_eq!(parse_quantity("3abc"), 3);
        assert_eq!(parse_quantity("-2"), -2);
        assert_eq!(parse_quantity("123456789012345678901234"), i64::MAX);
    }
}
