//! Storefront configuration, embedded at build time.
//!
//! The same file is compiled into the server and the hydrated bundle so both
//! sides render from identical settings.

use anyhow::{Context, Result};
use pizza_shop::config::ShopConfig;
use serde::Deserialize;
use sqrt_game::config::GameConfig;

const EMBEDDED_CONFIG: &str = include_str!("../config/storefront.toml");

/// Settings for both pages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub shop: ShopConfig,
    pub game: GameConfig,
}

impl StorefrontConfig {
    /// Parse and validate a TOML document.
    pub fn parse(content: &str) -> Result<Self> {
        let config: StorefrontConfig =
            toml::from_str(content).context("Failed to parse storefront config")?;
        config.shop.validate().context("Invalid [shop] config")?;
        config.game.validate().context("Invalid [game] config")?;
        Ok(config)
    }

    /// Load the embedded config, falling back to defaults if it is broken.
    pub fn load() -> Self {
        Self::parse(EMBEDDED_CONFIG).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default storefront config");
            Self::default()
        })
    }
}
