use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::product::{Category, ComponentChoices, PriceCatalog};

/// Resolved price per category
pub type ComponentPrices = BTreeMap<Category, u32>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Multiplier applied to the subtotal (1.2 = 20% markup)
    pub markup_rate: f64,

    /// Last estimate number considered issued; the first estimate gets base + 1
    pub estimate_number_base: u64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            markup_rate: 1.2,
            estimate_number_base: 1000,
        }
    }
}

impl From<&tally_core::Config> for PricingConfig {
    fn from(config: &tally_core::Config) -> Self {
        Self {
            markup_rate: config.pricing.markup_rate,
            estimate_number_base: config.pricing.estimate_number_base,
        }
    }
}

/// Computed price breakdown for one set of component choices
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub estimate_number: u64,
    pub components: ComponentChoices,
    pub component_prices: ComponentPrices,
    pub subtotal: u64,
    pub markup_rate: f64,
    pub total_with_markup: f64,
    pub created_at: DateTime<Utc>,
}

impl Estimate {
    /// Resolved price for a category (0 if the estimate was built by hand without it)
    pub fn price_of(&self, category: Category) -> u32 {
        self.component_prices.get(&category).copied().unwrap_or(0)
    }
}

/// Turns component choices into priced estimates.
///
/// Owns the estimate number sequence, so one engine should be shared for
/// the whole process to keep numbers unique.
pub struct PricingEngine {
    catalog: PriceCatalog,
    config: PricingConfig,
    last_estimate_number: u64,
}

impl PricingEngine {
    pub fn new(catalog: PriceCatalog, config: PricingConfig) -> Self {
        let last_estimate_number = config.estimate_number_base;
        Self {
            catalog,
            config,
            last_estimate_number,
        }
    }

    pub fn from_config(catalog: PriceCatalog, config: &tally_core::Config) -> Self {
        Self::new(catalog, PricingConfig::from(config))
    }

    pub fn catalog(&self) -> &PriceCatalog {
        &self.catalog
    }

    /// Most recently issued estimate number (the base if none were issued yet)
    pub fn last_estimate_number(&self) -> u64 {
        self.last_estimate_number
    }

    /// Price every chosen component, then allocate the next estimate number.
    ///
    /// Categories are checked in canonical order and the first unknown label
    /// fails the whole estimate; no number is consumed on failure.
    pub fn calculate_estimate(&mut self, choices: &ComponentChoices) -> Result<Estimate, EstimateError> {
        let mut component_prices = ComponentPrices::new();

        for category in Category::ALL {
            let label = choices.get(category);
            let price = self.catalog.price(category, label).ok_or_else(|| {
                tracing::warn!(%category, label, "Rejected estimate with unknown component");
                EstimateError::InvalidChoice {
                    category,
                    label: label.to_string(),
                }
            })?;
            component_prices.insert(category, price);
        }

        let subtotal: u64 = component_prices.values().map(|p| u64::from(*p)).sum();
        let total_with_markup = self.apply_markup(subtotal);

        self.last_estimate_number += 1;
        let estimate_number = self.last_estimate_number;

        tracing::info!(estimate_number, subtotal, total_with_markup, "Estimate calculated");

        Ok(Estimate {
            estimate_number,
            components: choices.clone(),
            component_prices,
            subtotal,
            markup_rate: self.config.markup_rate,
            total_with_markup,
            created_at: Utc::now(),
        })
    }

    /// Subtotal times the markup rate, rounded to 2 decimals
    pub fn apply_markup(&self, subtotal: u64) -> f64 {
        round_to_cents(subtotal as f64 * self.config.markup_rate)
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::new(PriceCatalog::standard(), PricingConfig::default())
    }
}

/// Round half away from zero to 2 decimal places
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, thiserror::Error)]
pub enum EstimateError {
    #[error("Invalid component choice: {label:?} is not a known {category} option")]
    InvalidChoice {
        category: Category,
        label: String,
    },
}

impl From<EstimateError> for tally_core::CoreError {
    fn from(err: EstimateError) -> Self {
        tally_core::CoreError::ValidationError(err.to_string())
    }
}
