//! Configuration Module
//!
//! This module defines the configuration structures for ticket purchasing.
//! Configuration is loaded from TOML files and parsed using serde.

use crate::TicketCategory;
use serde::Deserialize;
use std::fs;

/// Main configuration structure
///
/// Contains the pricing table and the per-purchase limits.
/// Loaded from a TOML file (e.g., config/default.toml). Every field
/// has a default, so an empty file is a valid configuration.
///
/// # Example TOML
/// ```toml
/// [pricing]
/// adult = 2000
/// child = 1000
///
/// [limits]
/// max_tickets_per_purchase = 20
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pricing: PricingConfig,
    pub limits: LimitsConfig,
}

/// Ticket prices in minor currency units (pence)
///
/// There is no infant price: infants are never charged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub adult: u32,
    pub child: u32,
}

impl PricingConfig {
    /// Default adult ticket price (£20)
    pub const ADULT_PRICE: u32 = 2000;
    /// Default child ticket price (£10)
    pub const CHILD_PRICE: u32 = 1000;

    /// Unit price for a category
    pub fn unit_price(&self, category: TicketCategory) -> u32 {
        match category {
            TicketCategory::Infant => 0,
            TicketCategory::Child => self.child,
            TicketCategory::Adult => self.adult,
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            adult: Self::ADULT_PRICE,
            child: Self::CHILD_PRICE,
        }
    }
}

/// Per-purchase limits
///
/// # Fields
/// - `max_tickets_per_purchase`: cap on child + adult tickets in one purchase
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub max_tickets_per_purchase: u32,
}

impl LimitsConfig {
    pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: Self::MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the TOML configuration file
    ///
    /// # Returns
    /// * `Ok(Config)` if the file was successfully loaded and parsed
    /// * `Err` if the file couldn't be read or the TOML is invalid
    ///
    /// # Example
    /// ```no_run
    /// # use cinema_tickets::Config;
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.pricing.adult, 2000);
        assert_eq!(config.pricing.child, 1000);
        assert_eq!(config.limits.max_tickets_per_purchase, 20);
    }

    #[test]
    fn test_partial_toml_overrides_only_given_fields() {
        let config = Config::from_toml("[pricing]\nadult = 2500\n").unwrap();
        assert_eq!(config.pricing.adult, 2500);
        assert_eq!(config.pricing.child, 1000);
        assert_eq!(config.limits.max_tickets_per_purchase, 20);
    }

    #[test]
    fn test_infant_price_is_always_zero() {
        let pricing = PricingConfig { adult: 5, child: 5 };
        assert_eq!(pricing.unit_price(TicketCategory::Infant), 0);
        assert_eq!(pricing.unit_price(TicketCategory::Child), 5);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::from_toml("[limits]\nmax_tickets_per_purchase = \"many\"\n").is_err());
    }

    #[test]
    fn test_default_config_file_parses() {
        let config = Config::from_toml(include_str!("../config/default.toml")).unwrap();
        assert_eq!(config, Config::default());
    }
}
