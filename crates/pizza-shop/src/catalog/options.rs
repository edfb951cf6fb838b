//! Size and crust choices.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::{Currency, Money};

/// Pizza size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Small,
    Medium,
    Large,
}

impl Size {
    /// All sizes in display order.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }

    /// Upcharge in whole currency units.
    pub fn upcharge_units(&self) -> i64 {
        match self {
            Size::Small => 0,
            Size::Medium => 1,
            Size::Large => 2,
        }
    }

    pub fn upcharge(&self, currency: Currency) -> Money {
        Money::units(self.upcharge_units(), currency)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pizza crust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Crust {
    #[default]
    Regular,
    Thin,
    Thick,
}

impl Crust {
    /// All crusts in display order.
    pub const ALL: [Crust; 3] = [Crust::Regular, Crust::Thin, Crust::Thick];

    pub fn as_str(&self) -> &'static str {
        match self {
            Crust::Regular => "regular",
            Crust::Thin => "thin",
            Crust::Thick => "thick",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Crust::Regular => "Regular",
            Crust::Thin => "Thin",
            Crust::Thick => "Thick",
        }
    }

    /// Upcharge in whole currency units.
    pub fn upcharge_units(&self) -> i64 {
        match self {
            Crust::Regular => 0,
            Crust::Thin | Crust::Thick => 1,
        }
    }

    pub fn upcharge(&self, currency: Currency) -> Money {
        Money::units(self.upcharge_units(), currency)
    }
}

impl fmt::Display for Crust {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size/crust chosen on one catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Selection {
    pub size: Size,
    pub crust: Crust,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_upcharges() {
        assert_eq!(Size::Small.upcharge_units(), 0);
        assert_eq!(Size::Medium.upcharge_units(), 1);
        assert_eq!(Size::Large.upcharge_units(), 2);
    }

    #[test]
    fn test_crust_upcharges() {
        assert_eq!(Crust::Regular.upcharge_units(), 0);
        assert_eq!(Crust::Thin.upcharge_units(), 1);
        assert_eq!(Crust::Thick.upcharge_units(), 1);
    }

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.size, Size::Small);
        assert_eq!(selection.crust, Crust::Regular);
    }

    #[test]
    fn test_display_uses_serde_names() {
        assert_eq!(Size::Medium.to_string(), "medium");
        assert_eq!(Crust::Thick.to_string(), "thick");
        assert_eq!(Size::Large.label(), "Large");
    }
}
