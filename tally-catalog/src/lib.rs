pub mod product;
pub mod pricing;
pub mod receipt;
pub mod inventory;

pub use product::{Category, CatalogError, ComponentChoices, PriceCatalog};
pub use pricing::{round_to_cents, ComponentPrices, Estimate, EstimateError, PricingConfig, PricingEngine};
pub use receipt::format_estimate;
pub use inventory::{InventoryError, InventoryManager};
