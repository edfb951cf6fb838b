//! End-to-end ordering sessions against the house menu.

use pizza_shop::prelude::*;

#[test]
fn test_full_order_session() {
    let mut shop = PizzaShop::new(&ShopConfig::default());

    // Large thick cheese: 8 + 2 + 1
    shop.select_size(0, Size::Large).unwrap();
    shop.select_crust(0, Crust::Thick).unwrap();
    let cheese = shop.add_to_cart(0).unwrap();

    // Two plain Hawaiians
    let hawaiian = shop.add_to_cart(2).unwrap();
    shop.update_quantity(hawaiian, 2);

    // A line added then removed
    let removed = shop.add_to_cart(1).unwrap();
    assert!(shop.remove_item(removed));

    assert_eq!(shop.cart().items.len(), 2);
    assert_eq!(shop.total().unwrap().amount_cents, 1100 + 2 * 1000);

    let details: Vec<String> = shop.cart().items.iter().map(selection_details).collect();
    assert_eq!(details[0], "Base: $8.00 | Large: +$2.00 | Thick crust: +$1.00");
    assert_eq!(details[1], "Base: $10.00 | Small | Regular crust");

    let total_before = shop.total().unwrap();
    let confirmation = shop.confirm_order().unwrap().unwrap();

    assert_eq!(confirmation.total, total_before);
    assert_eq!(
        confirmation.lines,
        vec![
            "1x Cheese \u{2014} $11.00".to_string(),
            "2x Hawaiian \u{2014} $20.00".to_string(),
        ]
    );
    assert!(shop
        .order_message()
        .unwrap()
        .lines()
        .any(|line| line == format!("Total: {}", total_before.display())));

    assert!(shop.cart().is_empty());
    assert!(shop.cart().get_item(cheese).is_none());
}

#[test]
fn test_second_confirm_on_emptied_cart_keeps_message() {
    let mut shop = PizzaShop::default();
    shop.add_to_cart(0).unwrap();
    shop.confirm_order().unwrap().unwrap();
    let message = shop.order_message().map(str::to_string);

    assert_eq!(shop.confirm_order(), Ok(None));
    assert_eq!(shop.order_message().map(str::to_string), message);
}

#[test]
fn test_total_zero_exactly_when_empty() {
    let mut shop = PizzaShop::default();
    assert!(shop.total().unwrap().is_zero());

    let id = shop.add_to_cart(0).unwrap();
    assert!(!shop.total().unwrap().is_zero());

    shop.remove_item(id);
    assert!(shop.total().unwrap().is_zero());
}

#[test]
fn test_configured_quantity_cap() {
    let config = ShopConfig::new().with_max_quantity(5);
    let mut shop = PizzaShop::new(&config);
    let id = shop.add_to_cart(0).unwrap();

    shop.update_quantity(id, 50);
    assert_eq!(shop.cart().get_item(id).unwrap().quantity, 5);
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut shop = PizzaShop::default();
    shop.add_to_cart(0).unwrap();
    let before = shop.clone();

    assert!(!shop.update_quantity(CartItemId::new(99), 3));
    assert!(!shop.remove_item(CartItemId::new(99)));
    assert_eq!(shop, before);
}

#[test]
fn test_catalog_in_other_currency_is_rejected() {
    let euro_menu = Catalog::house_menu(Currency::EUR);
    let result = PizzaShop::with_catalog(euro_menu, &ShopConfig::default());
    assert!(matches!(result, Err(ShopError::CurrencyMismatch { .. })));

    let euro_config = ShopConfig::new().with_currency(Currency::EUR);
    let euro_menu = Catalog::house_menu(Currency::EUR);
    let mut shop = PizzaShop::with_catalog(euro_menu, &euro_config).unwrap();
    shop.add_to_cart(0).unwrap();
    let confirmation = shop.confirm_order().unwrap().unwrap();
    assert_eq!(
        confirmation.message(),
        "Order Confirmed!\n\
         1x Cheese \u{2014} \u{20ac}8.00\n\
         Total: \u{20ac}8.00\n\
         \n\
         Thank you for your order!"
    );
}
