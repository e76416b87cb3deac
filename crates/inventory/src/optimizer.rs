//! Reorder-point and order-quantity math.
//!
//! Formulas are the classical inventory-control ones:
//! - safety stock = stddev(demand) * factor * sqrt(lead time), the
//!   demand-variability-during-lead-time buffer;
//! - reorder point = average daily demand * lead time + safety stock;
//! - EOQ = sqrt(2 * annual demand * ordering cost / (unit cost * carrying
//!   rate)), minimizing ordering plus carrying cost.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockpulse_core::stats::{mean, stddev_sample};
use stockpulse_core::{AnalysisError, AnalysisResult, ProductId};

use crate::level::{InventorySnapshot, SalesRecord};

/// Reorder policy computed for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReorderPolicy {
    pub reorder_point: f64,
    pub safety_stock: f64,
    pub avg_daily_demand: f64,
}

/// Order-quantity plan computed for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderQuantityPlan {
    pub eoq: f64,
    pub annual_demand: f64,
    pub total_annual_cost: f64,
}

/// Inventory optimization facade. Holds configuration only.
#[derive(Debug, Clone, Copy)]
pub struct InventoryOptimizer {
    lead_time_days: u32,
    safety_stock_factor: f64,
    carrying_cost_rate: f64,
}

impl Default for InventoryOptimizer {
    fn default() -> Self {
        Self {
            lead_time_days: 14,
            safety_stock_factor: 1.5,
            carrying_cost_rate: 0.2,
        }
    }
}

impl InventoryOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lead_time_days(mut self, lead_time_days: u32) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    pub fn with_safety_stock_factor(mut self, safety_stock_factor: f64) -> Self {
        self.safety_stock_factor = safety_stock_factor;
        self
    }

    /// Default carrying-cost rate; overridable per call via
    /// [`Self::optimize_order_quantities_with_rate`].
    pub fn with_carrying_cost_rate(mut self, carrying_cost_rate: f64) -> Self {
        self.carrying_cost_rate = carrying_cost_rate;
        self
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    /// Compute reorder point, safety stock, and average daily demand for
    /// every product in the snapshot.
    ///
    /// A product with a single history point gets zero safety stock (zero
    /// variance fallback). A product with no history rows at all has no
    /// defined demand; that fails fast with [`AnalysisError::InsufficientData`].
    pub fn calculate_reorder_points(
        &self,
        inventory: &InventorySnapshot,
        sales_history: &[SalesRecord],
    ) -> AnalysisResult<BTreeMap<ProductId, ReorderPolicy>> {
        validate_history(sales_history)?;

        let mut policies = BTreeMap::new();
        for product in inventory.keys() {
            let quantities: Vec<f64> = sales_history
                .iter()
                .filter(|r| &r.product == product)
                .map(|r| r.quantity)
                .collect();
            if quantities.is_empty() {
                return Err(AnalysisError::insufficient_data(format!(
                    "no sales history for product {product}"
                )));
            }

            let avg_daily_demand = mean(&quantities);
            let safety_stock = stddev_sample(&quantities)
                * self.safety_stock_factor
                * (self.lead_time_days as f64).sqrt();
            let reorder_point = avg_daily_demand * self.lead_time_days as f64 + safety_stock;

            policies.insert(
                product.clone(),
                ReorderPolicy {
                    reorder_point,
                    safety_stock,
                    avg_daily_demand,
                },
            );
        }

        tracing::debug!(products = policies.len(), "reorder points calculated");
        Ok(policies)
    }

    /// EOQ plan per product at the configured carrying-cost rate.
    pub fn optimize_order_quantities(
        &self,
        inventory: &InventorySnapshot,
        sales_history: &[SalesRecord],
    ) -> AnalysisResult<BTreeMap<ProductId, OrderQuantityPlan>> {
        self.optimize_order_quantities_with_rate(inventory, sales_history, self.carrying_cost_rate)
    }

    /// EOQ plan per product at an explicit carrying-cost rate.
    pub fn optimize_order_quantities_with_rate(
        &self,
        inventory: &InventorySnapshot,
        sales_history: &[SalesRecord],
        carrying_cost_rate: f64,
    ) -> AnalysisResult<BTreeMap<ProductId, OrderQuantityPlan>> {
        if !(carrying_cost_rate.is_finite() && carrying_cost_rate > 0.0) {
            return Err(AnalysisError::validation(format!(
                "carrying_cost_rate must be a positive finite number, got {carrying_cost_rate}"
            )));
        }
        validate_history(sales_history)?;
        let window_days = history_window_days(sales_history)?;

        let mut plans = BTreeMap::new();
        for (product, level) in inventory {
            if !(level.unit_cost.is_finite() && level.unit_cost > 0.0) {
                return Err(AnalysisError::validation(format!(
                    "product {product} has non-positive unit_cost {}",
                    level.unit_cost
                )));
            }
            if !(level.ordering_cost.is_finite() && level.ordering_cost >= 0.0) {
                return Err(AnalysisError::validation(format!(
                    "product {product} has invalid ordering_cost {}",
                    level.ordering_cost
                )));
            }

            let total_quantity: f64 = sales_history
                .iter()
                .filter(|r| &r.product == product)
                .map(|r| r.quantity)
                .sum();
            let annual_demand = total_quantity * 365.0 / window_days;

            let eoq = (2.0 * annual_demand * level.ordering_cost
                / (level.unit_cost * carrying_cost_rate))
                .sqrt();
            let total_annual_cost = if eoq > 0.0 {
                total_cost(
                    annual_demand,
                    eoq,
                    level.ordering_cost,
                    level.unit_cost,
                    carrying_cost_rate,
                )
            } else {
                0.0
            };

            plans.insert(
                product.clone(),
                OrderQuantityPlan {
                    eoq,
                    annual_demand,
                    total_annual_cost,
                },
            );
        }

        tracing::debug!(
            products = plans.len(),
            carrying_cost_rate,
            "order quantities optimized"
        );
        Ok(plans)
    }
}

/// Annual ordering cost plus annual carrying cost at `order_quantity`.
pub(crate) fn total_cost(
    annual_demand: f64,
    order_quantity: f64,
    ordering_cost: f64,
    unit_cost: f64,
    carrying_cost_rate: f64,
) -> f64 {
    let annual_ordering_cost = annual_demand / order_quantity * ordering_cost;
    let annual_carrying_cost = order_quantity / 2.0 * unit_cost * carrying_cost_rate;
    annual_ordering_cost + annual_carrying_cost
}

/// Inclusive calendar span of the history window, in days.
fn history_window_days(sales_history: &[SalesRecord]) -> AnalysisResult<f64> {
    let min = sales_history.iter().map(|r| r.date).min();
    let max = sales_history.iter().map(|r| r.date).max();
    match (min, max) {
        (Some(min), Some(max)) => Ok(((max - min).num_days() + 1) as f64),
        _ => Err(AnalysisError::insufficient_data(
            "sales history is empty".to_string(),
        )),
    }
}

fn validate_history(sales_history: &[SalesRecord]) -> AnalysisResult<()> {
    if sales_history.is_empty() {
        return Err(AnalysisError::insufficient_data(
            "sales history is empty".to_string(),
        ));
    }
    for record in sales_history {
        if !record.quantity.is_finite() {
            return Err(AnalysisError::validation(format!(
                "sales quantity for product {} on {} is non-finite",
                record.product, record.date
            )));
        }
    }
    Ok(())
}
