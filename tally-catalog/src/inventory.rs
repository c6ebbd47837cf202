use std::collections::HashMap;

use crate::product::Category;

/// In-memory stock counters, one per component category
pub struct InventoryManager {
    stock: HashMap<Category, u32>,
}

impl InventoryManager {
    pub fn new() -> Self {
        Self {
            stock: HashMap::new(),
        }
    }

    /// Every category starts with the same number of units
    pub fn with_initial_stock(units: u32) -> Self {
        let mut manager = Self::new();
        for category in Category::ALL {
            manager.initialize(category, units);
        }
        manager
    }

    pub fn from_config(config: &tally_core::Config) -> Self {
        Self::with_initial_stock(config.inventory.initial_stock)
    }

    /// Set the units on hand for a category
    pub fn initialize(&mut self, category: Category, units: u32) {
        self.stock.insert(category, units);
    }

    /// Remaining units; an untracked category has none
    pub fn get_stock(&self, category: Category) -> u32 {
        self.stock.get(&category).copied().unwrap_or(0)
    }

    /// First category, in canonical order, with nothing left
    pub fn first_exhausted(&self) -> Option<Category> {
        Category::ALL.into_iter().find(|c| self.get_stock(*c) == 0)
    }

    /// Take one unit of a category
    pub fn reserve_unit(&mut self, category: Category) -> Result<(), InventoryError> {
        let units = match self.stock.get_mut(&category) {
            Some(units) if *units > 0 => units,
            _ => return Err(InventoryError::OutOfStock(category)),
        };

        *units -= 1;
        tracing::debug!(%category, remaining = *units, "Reserved one unit");

        Ok(())
    }

    /// Add units to a category, tracking it if it was unknown. Saturates at `u32::MAX`.
    pub fn restock(&mut self, category: Category, units: u32) {
        let available = self.stock.entry(category).or_insert(0);
        *available = available.saturating_add(units);
        tracing::info!(%category, units, available = *available, "Restocked");
    }
}

impl Default for InventoryManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("{0} is out of stock")]
    OutOfStock(Category),
}

impl From<InventoryError> for tally_core::CoreError {
    fn from(err: InventoryError) -> Self {
        tally_core::CoreError::ResourceExhausted(err.to_string())
    }
}
