use tally_catalog::{Category, Estimate, InventoryError, InventoryManager};

use crate::models::Order;

/// Append-only record of placed orders
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    /// Turn an estimate into an order, taking one unit of every category.
    ///
    /// Stock is checked for all categories before any unit is taken, so a
    /// failed order leaves the inventory untouched.
    pub fn place_order(
        &mut self,
        inventory: &mut InventoryManager,
        estimate: &Estimate,
        customer_name: impl Into<String>,
        customer_contact: impl Into<String>,
    ) -> Result<Order, OrderError> {
        if let Some(category) = inventory.first_exhausted() {
            tracing::warn!(
                estimate_number = estimate.estimate_number,
                %category,
                "Cannot place order, component out of stock"
            );
            return Err(OrderError::OutOfStock { category });
        }

        for category in Category::ALL {
            inventory.reserve_unit(category)?;
        }

        let order = Order::from_estimate(estimate, customer_name.into(), customer_contact.into());
        tracing::info!(
            order_id = %order.id,
            estimate_number = order.estimate_number,
            total_with_markup = order.total_with_markup,
            "Order placed"
        );

        self.orders.push(order.clone());
        Ok(order)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn find_by_estimate(&self, estimate_number: u64) -> Option<&Order> {
        self.orders.iter().find(|o| o.estimate_number == estimate_number)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Cannot place order: {category} is out of stock")]
    OutOfStock {
        category: Category,
    },

    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl From<OrderError> for tally_core::CoreError {
    fn from(err: OrderError) -> Self {
        tally_core::CoreError::ResourceExhausted(err.to_string())
    }
}
