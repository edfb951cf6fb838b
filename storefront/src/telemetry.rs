//! Server-side tracing setup.

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "classroom_storefront=info,pizza_shop=info,sqrt_game=info";

/// Install the fmt subscriber once per component instance.
///
/// Spin reuses instances across requests, so repeat calls are ignored.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .try_init();
}
