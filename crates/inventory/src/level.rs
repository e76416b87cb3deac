use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpulse_core::ProductId;

/// Current stock position and cost parameters for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryLevel {
    pub quantity_on_hand: f64,
    pub unit_cost: f64,
    /// Fixed cost of placing one replenishment order.
    pub ordering_cost: f64,
    pub max_stock_level: f64,
}

/// Inventory snapshot keyed by product. `BTreeMap` keeps iteration (and
/// therefore report and recommendation order) deterministic.
pub type InventorySnapshot = BTreeMap<ProductId, InventoryLevel>;

/// One sales observation: quantity of a product sold on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product: ProductId,
    pub date: NaiveDate,
    pub quantity: f64,
}
