//! Shop configuration.

use serde::{Deserialize, Serialize};

use crate::cart::{DEFAULT_MAX_QUANTITY, MIN_QUANTITY};
use crate::error::{ShopError, ShopResult};
use crate::money::Currency;

/// Configuration for a shop session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Currency for the menu and cart.
    pub currency: Currency,
    /// Largest quantity a single cart line may hold.
    pub max_quantity: i64,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            currency: Currency::USD,
            max_quantity: DEFAULT_MAX_QUANTITY,
        }
    }
}

impl ShopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Set the per-line quantity cap.
    pub fn with_max_quantity(mut self, max_quantity: i64) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    /// Parse from TOML and validate.
    pub fn from_toml(content: &str) -> ShopResult<Self> {
        let config: ShopConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ShopResult<()> {
        if self.max_quantity < MIN_QUANTITY {
            return Err(ShopError::InvalidConfig(format!(
                "max_quantity must be at least {}, got {}",
                MIN_QUANTITY, self.max_quantity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_config_default() {
        let config = ShopConfig::default();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.max_quantity, 99);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_shop_config_builder_chain() {
        let config = ShopConfig::new()
            .with_currency(Currency::CAD)
            .with_max_quantity(10);

        assert_eq!(config.currency, Currency::CAD);
        assert_eq!(config.max_quantity, 10);
    }

    #[test]
    fn test_shop_config_from_toml() {
        let config = ShopConfig::from_toml("currency = \"EUR\"\nmax_quantity = 12\n").unwrap();
        assert_eq!(config.currency, Currency::EUR);
        assert_eq!(config.max_quantity, 12);
    }

    #[test]
    fn test_shop_config_from_toml_partial() {
        let config = ShopConfig::from_toml("max_quantity = 5").unwrap();
        assert_eq!(config.currency, Currency::USD);
        assert_eq!(config.max_quantity, 5);
    }

    #[test]
    fn test_shop_config_rejects_zero_max() {
        let err = ShopConfig::from_toml("max_quantity = 0").unwrap_err();
        assert!(matches!(err, ShopError::InvalidConfig(_)));
    }

    #[test]
    fn test_shop_config_rejects_bad_toml() {
        assert!(matches!(
            ShopConfig::from_toml("currency = ["),
            Err(ShopError::InvalidConfig(_))
        ));
    }
}
