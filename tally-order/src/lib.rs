pub mod models;
pub mod ledger;
pub mod report;
pub mod shop;

pub use models::Order;
pub use ledger::{OrderError, OrderLedger};
pub use report::LedgerReport;
pub use shop::Shop;
