//! Pizza ordering page.

use leptos::prelude::*;
use pizza_shop::cart::{selection_details, upcharge_badge, CartItem};
use pizza_shop::catalog::{Crust, Pizza, Size};
use pizza_shop::{CartItemId, PizzaShop};

use crate::config::StorefrontConfig;

// ============================================================================
// Page
// ============================================================================

/// Menu on the left, cart on the right. All state lives in one signal.
#[component]
pub fn PizzaPage() -> impl IntoView {
    let config = use_context::<StorefrontConfig>().unwrap_or_default();
    let shop = RwSignal::new(PizzaShop::new(&config.shop));
    let pizzas = shop.with_untracked(|s| s.catalog().pizzas().to_vec());

    view! {
        <div class="page">
            <header class="top-bar">
                <img src="/images/logo.png" alt="logo" class="logo"/>
                <div class="bar-title">"Hannah, Ted & Madi\u{2019}s Super Swaggy Pizza"</div>
            </header>

            <div class="container">
                <section class="pizzas-section">
                    <AboutCard/>
                    <h2 class="pizza-options-title">"PIZZA OPTIONS"</h2>
                    <div class="pizza-grid">
                        {pizzas
                            .into_iter()
                            .enumerate()
                            .map(|(index, pizza)| {
                                view! { <PizzaCard shop=shop index=index pizza=pizza/> }
                            })
                            .collect_view()}
                    </div>
                </section>

                <CartPanel shop=shop max_quantity=config.shop.max_quantity/>
            </div>
        </div>
    }
}

#[component]
fn AboutCard() -> impl IntoView {
    view! {
        <div class="about-card">
            <div class="about-title">"ABOUT"</div>
            <p>
                "Welcome to our family friendly pizza spot! We\u{2019}re Hannah, Ted, and Madi... \
                 three CS majors who love good crust, melty cheese, and keeping it super swaggy. \
                 We can promise you that this website works, but we cannot promise you pizza. \
                 We hope you enjoy our site as much as we enjoyed making it!"
            </p>
        </div>
    }
}

// ============================================================================
// Menu Components
// ============================================================================

#[component]
fn PizzaCard(shop: RwSignal<PizzaShop>, index: usize, pizza: Pizza) -> impl IntoView {
    let price = move || {
        shop.with(|s| s.current_price(index).map(|p| p.display()).unwrap_or_default())
    };

    let add = move |_| {
        shop.update(|s| {
            if let Err(e) = s.add_to_cart(index) {
                tracing::warn!(error = %e, "add to cart failed");
            }
        })
    };

    view! {
        <div class="pizza-card">
            <img class="pizza-image" src=pizza.image.clone() alt=pizza.name.clone()/>
            <div class="pizza-details">
                <div class="pizza-name">{pizza.name.clone()}</div>
                <div class="pizza-description">{pizza.description.clone()}</div>
                <div class="pizza-controls">
                    <div class="control-group">
                        <label>"Size"</label>
                        <div class="button-group size-group">
                            {Size::ALL
                                .into_iter()
                                .map(|size| view! { <SizeButton shop=shop index=index size=size/> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="control-group">
                        <label>"Crust"</label>
                        <div class="button-group crust-group">
                            {Crust::ALL
                                .into_iter()
                                .map(|crust| {
                                    view! { <CrustButton shop=shop index=index crust=crust/> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="price-display">"Total: " {price}</div>
                <button class="add-btn" on:click=add>"Add to Cart"</button>
            </div>
        </div>
    }
}

#[component]
fn SizeButton(shop: RwSignal<PizzaShop>, index: usize, size: Size) -> impl IntoView {
    let active = move || {
        shop.with(|s| s.selection(index).map(|sel| sel.size == size).unwrap_or(false))
    };
    let badge = shop.with_untracked(|s| upcharge_badge(size.upcharge(s.cart().currency)));

    view! {
        <button
            class="option-btn"
            class:active=active
            on:click=move |_| {
                shop.update(|s| {
                    if let Err(e) = s.select_size(index, size) {
                        tracing::warn!(error = %e, "size selection failed");
                    }
                })
            }
        >
            {size.label()}
            {badge.map(|b| view! { <span class="option-price">{b}</span> })}
        </button>
    }
}

#[component]
fn CrustButton(shop: RwSignal<PizzaShop>, index: usize, crust: Crust) -> impl IntoView {
    let active = move || {
        shop.with(|s| s.selection(index).map(|sel| sel.crust == crust).unwrap_or(false))
    };
    let badge = shop.with_untracked(|s| upcharge_badge(crust.upcharge(s.cart().currency)));

    view! {
        <button
            class="option-btn"
            class:active=active
            on:click=move |_| {
                shop.update(|s| {
                    if let Err(e) = s.select_crust(index, crust) {
                        tracing::warn!(error = %e, "crust selection failed");
                    }
                })
            }
        >
            {crust.label()}
            {badge.map(|b| view! { <span class="option-price">{b}</span> })}
        </button>
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartPanel(shop: RwSignal<PizzaShop>, max_quantity: i64) -> impl IntoView {
    let is_empty = move || shop.with(|s| s.cart().is_empty());
    let line_ids = move || shop.with(|s| s.cart().items.iter().map(|i| i.id).collect::<Vec<_>>());
    let total = move || {
        shop.with(|s| match s.total() {
            Ok(total) => total.display(),
            Err(e) => {
                tracing::warn!(error = %e, "cart total unavailable");
                "\u{2014}".to_string()
            }
        })
    };
    let cannot_confirm = move || !shop.with(|s| s.can_confirm());
    let message = move || shop.with(|s| s.order_message().map(str::to_string));

    view! {
        <aside class="cart-section">
            <div class="cart-header">"CART"</div>
            <div class="cart-items">
                <Show when=is_empty>
                    <div class="empty-cart">"Your cart is empty"</div>
                </Show>
                <For
                    each=line_ids
                    key=|id| *id
                    children=move |id| {
                        view! { <CartRow shop=shop id=id max_quantity=max_quantity/> }
                    }
                />
            </div>

            <div class="cart-total">"Total: " {total}</div>
            <button
                class="confirm-order-btn"
                disabled=cannot_confirm
                on:click=move |_| {
                    shop.update(|s| {
                        if let Err(e) = s.confirm_order() {
                            tracing::warn!(error = %e, "order confirmation failed");
                        }
                    })
                }
            >
                "Confirm Order"
            </button>

            {move || {
                message()
                    .map(|text| {
                        view! {
                            <div class="order-message">
                                {text}
                                <button
                                    class="dismiss-btn"
                                    on:click=move |_| shop.update(|s| s.dismiss_message())
                                >
                                    "Close"
                                </button>
                            </div>
                        }
                    })
            }}
        </aside>
    }
}

/// One cart line. The row stays mounted while its id is in the cart so the
/// quantity box keeps focus while typing.
#[component]
fn CartRow(shop: RwSignal<PizzaShop>, id: CartItemId, max_quantity: i64) -> impl IntoView {
    let field = move |f: fn(&CartItem) -> String| {
        move || shop.with(|s| s.cart().get_item(id).map(f).unwrap_or_default())
    };

    let name = field(|item| item.name.clone());
    let details = field(selection_details);
    let quantity = field(|item| item.quantity.to_string());
    let line_total = field(|item| item.line_total().display());

    view! {
        <div class="cart-item">
            <div class="cart-item-name">{name}</div>
            <div class="cart-item-details">{details}</div>
            <div class="cart-item-controls">
                <div class="quantity-control">
                    <label for=id.input_id()>"Qty:"</label>
                    <input
                        id=id.input_id()
                        type="number"
                        min="1"
                        max=max_quantity.to_string()
                        prop:value=quantity
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            shop.update(|s| {
                                s.update_quantity_from_input(id, &raw);
                            })
                        }
                    />
                </div>
                <div class="cart-item-price">{line_total}</div>
                <button
                    class="remove-btn"
                    on:click=move |_| {
                        shop.update(|s| {
                            s.remove_item(id);
                        })
                    }
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
