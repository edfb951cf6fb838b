//! Unit pricing and price breakdowns.

use crate::cart::CartItem;
use crate::catalog::{Crust, Selection, Size};
use crate::money::Money;

/// Unit price of a pizza: base price plus size and crust upcharges.
pub fn price_for(base_price: Money, size: Size, crust: Crust) -> Money {
    let currency = base_price.currency;
    let upcharges = size.upcharge(currency).amount_cents + crust.upcharge(currency).amount_cents;
    Money::new(base_price.amount_cents.saturating_add(upcharges), currency)
}

/// Unit price for a row selection.
pub fn price_for_selection(base_price: Money, selection: Selection) -> Money {
    price_for(base_price, selection.size, selection.crust)
}

/// Badge shown on an option button, e.g. "+$1.00". None for free options.
pub fn upcharge_badge(upcharge: Money) -> Option<String> {
    upcharge.is_positive().then(|| format!("+{}", upcharge.display()))
}

/// Breakdown shown under a cart line,
/// e.g. "Base: $8.00 | Large: +$2.00 | Thick crust: +$1.00".
pub fn selection_details(item: &CartItem) -> String {
    let currency = item.base_price.currency;

    let size_text = match upcharge_badge(item.size.upcharge(currency)) {
        Some(badge) => format!("{}: {}", item.size.label(), badge),
        None => item.size.label().to_string(),
    };

    let crust_text = match upcharge_badge(item.crust.upcharge(currency)) {
        Some(badge) => format!("{} crust: {}", item.crust.label(), badge),
        None => format!("{} crust", item.crust.label()),
    };

    format!(
        "Base: {} | {} | {}",
        item.base_price.display(),
        size_text,
        crust_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::CartItemId;
    use crate::money::Currency;

    fn usd(units: i64) -> Money {
        Money::units(units, Currency::USD)
    }

    #[test]
    fn test_price_for_every_combination() {
        let base = usd(8);
        for size in Size::ALL {
            for crust in Crust::ALL {
                let expected = 800 + size.upcharge_units() * 100 + crust.upcharge_units() * 100;
                assert_eq!(
                    price_for(base, size, crust).amount_cents,
                    expected,
                    "{size}/{crust}"
                );
            }
        }
    }

    #[test]
    fn test_price_for_large_thick() {
        assert_eq!(price_for(usd(8), Size::Large, Crust::Thick), usd(11));
    }

    #[test]
    fn test_price_for_defaults_is_base() {
        assert_eq!(price_for_selection(usd(9), Selection::default()), usd(9));
    }

    #[test]
    fn test_upcharge_badge() {
        assert_eq!(upcharge_badge(usd(2)), Some("+$2.00".to_string()));
        assert_eq!(upcharge_badge(usd(0)), None);
    }

    #[test]
    fn test_selection_details() {
        let item = CartItem::new(CartItemId::new(0), "Cheese", usd(8), Size::Large, Crust::Thick);
        assert_eq!(
            selection_details(&item),
            "Base: $8.00 | Large: +$2.00 | Thick crust: +$1.00"
        );

        let plain = CartItem::new(
            CartItemId::new(1),
            "Cheese",
            usd(8),
            Size::Small,
            Crust::Regular,
        );
        assert_eq!(selection_details(&plain), "Base: $8.00 | Small | Regular crust");
    }
}
