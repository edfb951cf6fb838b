//! Classroom storefront
//!
//! Two pages on one Leptos app:
//! - `/` pizza menu with size and crust options, a cart and order confirmation
//! - `/sqrt` square-root guessing game
//!
//! Rendered on Spin/WASI and hydrated in the browser.

mod app;
mod config;
mod game;
mod pizza;

#[cfg(feature = "ssr")]
mod server;
#[cfg(feature = "ssr")]
mod telemetry;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
