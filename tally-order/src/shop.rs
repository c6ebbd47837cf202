use tally_catalog::{
    format_estimate, Category, ComponentChoices, Estimate, InventoryManager, PriceCatalog, PricingEngine,
};
use tally_core::{CoreResult, Config};

use crate::ledger::OrderLedger;
use crate::models::Order;

/// The shop's whole mutable state: estimate sequence, stock and order ledger.
///
/// Build one per process and pass it by reference to every operation.
pub struct Shop {
    pricing: PricingEngine,
    inventory: InventoryManager,
    ledger: OrderLedger,
}

impl Shop {
    pub fn new(pricing: PricingEngine, inventory: InventoryManager) -> Self {
        Self {
            pricing,
            inventory,
            ledger: OrderLedger::new(),
        }
    }

    /// Standard catalog with markup, numbering and stock taken from config
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            PricingEngine::from_config(PriceCatalog::standard(), config),
            InventoryManager::from_config(config),
        )
    }

    pub fn calculate_estimate(&mut self, choices: &ComponentChoices) -> CoreResult<Estimate> {
        Ok(self.pricing.calculate_estimate(choices)?)
    }

    pub fn format_estimate(&self, estimate: &Estimate) -> String {
        format_estimate(estimate)
    }

    pub fn get_stock(&self, category: Category) -> u32 {
        self.inventory.get_stock(category)
    }

    pub fn restock(&mut self, category: Category, units: u32) {
        self.inventory.restock(category, units);
    }

    pub fn place_order(
        &mut self,
        estimate: &Estimate,
        customer_name: impl Into<String>,
        customer_contact: impl Into<String>,
    ) -> CoreResult<Order> {
        Ok(self
            .ledger
            .place_order(&mut self.inventory, estimate, customer_name, customer_contact)?)
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn catalog(&self) -> &PriceCatalog {
        self.pricing.catalog()
    }
}

impl Default for Shop {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
