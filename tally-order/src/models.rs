use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tally_catalog::{ComponentChoices, ComponentPrices, Estimate};
use uuid::Uuid;

/// A committed estimate bound to a customer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub estimate_number: u64,
    pub components: ComponentChoices,
    pub component_prices: ComponentPrices,
    pub subtotal: u64,
    pub total_with_markup: f64,
    pub customer_name: String,
    pub customer_contact: String,
    pub order_date: NaiveDate,
}

impl Order {
    /// Snapshot an estimate for a customer, dated today
    pub fn from_estimate(estimate: &Estimate, customer_name: String, customer_contact: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            estimate_number: estimate.estimate_number,
            components: estimate.components.clone(),
            component_prices: estimate.component_prices.clone(),
            subtotal: estimate.subtotal,
            total_with_markup: estimate.total_with_markup,
            customer_name,
            customer_contact,
            order_date: Local::now().date_naive(),
        }
    }
}
