//! Per-session storefront state.
//!
//! [`PizzaShop`] is the whole mutable state behind the pizza page: one
//! size/crust selection per menu row, the cart, the id counter and the
//! confirmation banner. The view layer keeps it in a single reactive cell
//! and calls these methods from event handlers.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cart::{parse_quantity, price_for_selection, Cart, CartItem};
use crate::catalog::{Catalog, Crust, Selection, Size};
use crate::checkout::OrderConfirmation;
use crate::config::ShopConfig;
use crate::error::{ShopError, ShopResult};
use crate::ids::{CartItemId, IdCounter};
use crate::money::Money;

/// Storefront session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaShop {
    catalog: Catalog,
    selections: Vec<Selection>,
    cart: Cart,
    ids: IdCounter,
    order_message: Option<String>,
}

impl PizzaShop {
    /// Create a session over the house menu.
    pub fn new(config: &ShopConfig) -> Self {
        Self::build(Catalog::house_menu(config.currency), config)
    }

    /// Create a session over a custom catalog.
    ///
    /// Every pizza must be priced in the configured currency.
    pub fn with_catalog(catalog: Catalog, config: &ShopConfig) -> ShopResult<Self> {
        for pizza in catalog.pizzas() {
            pizza.base_price.ensure_currency(config.currency)?;
        }
        Ok(Self::build(catalog, config))
    }

    fn build(catalog: Catalog, config: &ShopConfig) -> Self {
        Self {
            selections: vec![Selection::default(); catalog.len()],
            catalog,
            cart: Cart::new(config.currency, config.max_quantity),
            ids: IdCounter::new(),
            order_message: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current selection for a menu row.
    pub fn selection(&self, index: usize) -> ShopResult<Selection> {
        self.selections
            .get(index)
            .copied()
            .ok_or(ShopError::PizzaNotFound(index))
    }

    pub fn select_size(&mut self, index: usize, size: Size) -> ShopResult<()> {
        let selection = self.selection_mut(index)?;
        selection.size = size;
        debug!(index, size = size.as_str(), "size selected");
        Ok(())
    }

    pub fn select_crust(&mut self, index: usize, crust: Crust) -> ShopResult<()> {
        let selection = self.selection_mut(index)?;
        selection.crust = crust;
        debug!(index, crust = crust.as_str(), "crust selected");
        Ok(())
    }

    /// Live unit price of a row with its current selection.
    pub fn current_price(&self, index: usize) -> ShopResult<Money> {
        let pizza = self.catalog.get(index)?;
        Ok(price_for_selection(pizza.base_price, self.selection(index)?))
    }

    /// Add the row's current configuration to the cart as a new line with
    /// quantity 1, then reset the row to small/regular.
    pub fn add_to_cart(&mut self, index: usize) -> ShopResult<CartItemId> {
        let pizza = self.catalog.get(index)?;
        let selection = self.selection(index)?;

        let id = self.ids.next_id();
        let item = CartItem::new(
            id,
            pizza.name.clone(),
            pizza.base_price,
            selection.size,
            selection.crust,
        );
        info!(
            id = id.get(),
            pizza = %item.name,
            size = item.size.as_str(),
            crust = item.crust.as_str(),
            unit_price = %item.unit_price,
            "added to cart"
        );
        self.cart.push(item)?;
        self.selections[index] = Selection::default();
        Ok(id)
    }

    /// Set a line's quantity. Unknown ids are ignored.
    pub fn update_quantity(&mut self, id: CartItemId, quantity: i64) -> bool {
        let updated = self.cart.update_quantity(id, quantity);
        if !updated {
            debug!(id = id.get(), "quantity update for unknown line ignored");
        }
        updated
    }

    /// Set a line's quantity from the raw text of its input.
    pub fn update_quantity_from_input(&mut self, id: CartItemId, raw: &str) -> bool {
        self.update_quantity(id, parse_quantity(raw))
    }

    /// Remove a line. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: CartItemId) -> bool {
        let removed = self.cart.remove_item(id);
        debug!(id = id.get(), removed, "remove item");
        removed
    }

    pub fn total(&self) -> ShopResult<Money> {
        self.cart.total()
    }

    /// Whether the confirm button should be enabled.
    pub fn can_confirm(&self) -> bool {
        self.total().is_ok_and(|total| !total.is_zero())
    }

    /// Confirm the order: store the summary banner and empty the cart.
    ///
    /// With a zero total nothing changes and `Ok(None)` is returned. If the
    /// total cannot be computed the cart is left as it was.
    pub fn confirm_order(&mut self) -> ShopResult<Option<OrderConfirmation>> {
        let Some(confirmation) = OrderConfirmation::from_cart(&self.cart)? else {
            return Ok(None);
        };
        info!(
            lines = confirmation.lines.len(),
            total = %confirmation.total,
            "order confirmed"
        );
        self.order_message = Some(confirmation.message());
        self.cart.clear();
        Ok(Some(confirmation))
    }

    /// The last confirmation banner, if any.
    pub fn order_message(&self) -> Option<&str> {
        self.order_message.as_deref()
    }

    pub fn dismiss_message(&mut self) {
        self.order_message = None;
    }

    fn selection_mut(&mut self, index: usize) -> ShopResult<&mut Selection> {
        self.selections
            .get_mut(index)
            .ok_or(ShopError::PizzaNotFound(index))
    }
}

impl Default for PizzaShop {
    fn default() -> Self {
        Self::new(&ShopConfig::default())
    }
}
