//! `stockpulse-inventory`
//!
//! **Responsibility:** inventory-control analytics.
//!
//! Classical reorder-point, safety-stock, and Economic Order Quantity
//! formulas over a current inventory snapshot plus sales history, and a
//! combined report with health metrics and reorder/reduce
//! recommendations. All operations are pure and synchronous.

pub mod level;
pub mod optimizer;
pub mod report;

pub use level::{InventoryLevel, InventorySnapshot, SalesRecord};
pub use optimizer::{InventoryOptimizer, OrderQuantityPlan, ReorderPolicy};
pub use report::{Action, InventoryHealth, InventoryReport, Recommendation, Urgency};
