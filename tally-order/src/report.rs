use chrono::Utc;
use serde::Serialize;
use tally_catalog::round_to_cents;

use crate::ledger::OrderLedger;
use crate::models::Order;

/// Aggregate figures over a set of orders
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LedgerReport {
    pub order_count: usize,
    pub gross_subtotal: u64,
    pub gross_total_with_markup: f64,
}

impl LedgerReport {
    pub fn from_orders(orders: &[Order]) -> Self {
        let gross_subtotal = orders.iter().map(|o| o.subtotal).sum();
        let gross_total: f64 = orders.iter().map(|o| o.total_with_markup).sum();

        Self {
            order_count: orders.len(),
            gross_subtotal,
            gross_total_with_markup: round_to_cents(gross_total),
        }
    }
}

impl OrderLedger {
    pub fn summary_report(&self) -> serde_json::Value {
        let report = LedgerReport::from_orders(self.orders());

        serde_json::json!({
            "report_date": Utc::now().to_rfc3339(),
            "metrics": report,
        })
    }
}
