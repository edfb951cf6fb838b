//! Pizza menu entries.

use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::money::{Currency, Money};

/// A pizza on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pizza {
    /// Display name.
    pub name: String,
    /// Price of a small, regular-crust pizza.
    pub base_price: Money,
    /// Menu blurb.
    pub description: String,
    /// Image path served from the public assets.
    pub image: String,
}

impl Pizza {
    pub fn new(
        name: impl Into<String>,
        base_price: Money,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            base_price,
            description: description.into(),
            image: image.into(),
        }
    }
}

/// The static menu, addressed by row index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pizzas: Vec<Pizza>,
}

impl Catalog {
    pub fn new(pizzas: Vec<Pizza>) -> Self {
        Self { pizzas }
    }

    /// The house menu.
    pub fn house_menu(currency: Currency) -> Self {
        Self::new(vec![
            Pizza::new(
                "Cheese",
                Money::units(8, currency),
                "Mozzarella cheese, tomato sauce... Ted\u{2019}s classic! Simple, reliable, and never disappoints.",
                "/images/cheese-pizza.jpeg",
            ),
            Pizza::new(
                "Pepperoni",
                Money::units(9, currency),
                "Pepperoni, mozzarella cheese, tomato sauce... Hannah\u{2019}s favorite! A little spicy, a little bold, and always the life of the party.",
                "/images/pepperoni-pizza.jpeg",
            ),
            Pizza::new(
                "Hawaiian",
                Money::units(10, currency),
                "Ham, pineapple, mozzarella cheese, tomato sauce... Madi\u{2019}s go-to. Sweet, salty, and just controversial enough to start a debate.",
                "/images/hawaiian-pizza.jpeg",
            ),
            Pizza::new(
                "Meatlovers",
                Money::units(11, currency),
                "Pepperoni, sausage, bacon, ham, mozzarella cheese... pure chaos in pizza form, but somehow it works (like our group projects).",
                "/images/meatlovers-pizza.jpeg",
            ),
        ])
    }

    pub fn get(&self, index: usize) -> Result<&Pizza, ShopError> {
        self.pizzas.get(index).ok_or(ShopError::PizzaNotFound(index))
    }

    pub fn pizzas(&self) -> &[Pizza] {
        &self.pizzas
    }

    pub fn len(&self) -> usize {
        self.pizzas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pizzas.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::house_menu(Currency::default())
    }
}
