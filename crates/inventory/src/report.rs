//! Combined inventory report: optimization numbers, health metrics, and
//! actionable recommendations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockpulse_core::{AnalysisResult, ProductId};

use crate::level::{InventoryLevel, InventorySnapshot, SalesRecord};
use crate::optimizer::{InventoryOptimizer, OrderQuantityPlan, ReorderPolicy};

/// Recommended action for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Reorder,
    Reduce,
}

/// How urgently the action should be taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

/// One actionable recommendation. Ephemeral: recomputed on every report,
/// no identity beyond the product it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub product: ProductId,
    pub action: Action,
    pub quantity: f64,
    pub urgency: Urgency,
}

/// Snapshot-wide stock health metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryHealth {
    /// Total value on hand, sum of quantity times unit cost.
    pub total_inventory_value: f64,
    /// Products with zero quantity on hand.
    pub stock_outs: usize,
    /// Products above their max stock level.
    pub overstock_items: usize,
}

/// The optimization numbers the report embeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSection {
    pub reorder_points: BTreeMap<ProductId, ReorderPolicy>,
    pub optimal_quantities: BTreeMap<ProductId, OrderQuantityPlan>,
}

/// Full inventory optimization report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryReport {
    pub inventory_optimization: OptimizationSection,
    pub inventory_health: InventoryHealth,
    pub recommendations: Vec<Recommendation>,
}

impl InventoryOptimizer {
    /// Compute reorder points and EOQ plans, then derive health metrics
    /// and recommendations from the current stock position.
    pub fn generate_inventory_report(
        &self,
        inventory: &InventorySnapshot,
        sales_history: &[SalesRecord],
    ) -> AnalysisResult<InventoryReport> {
        let reorder_points = self.calculate_reorder_points(inventory, sales_history)?;
        let optimal_quantities = self.optimize_order_quantities(inventory, sales_history)?;

        let recommendations = recommend(inventory, &reorder_points, &optimal_quantities);
        tracing::debug!(
            products = inventory.len(),
            recommendations = recommendations.len(),
            "inventory report generated"
        );

        Ok(InventoryReport {
            inventory_health: inventory_health(inventory),
            recommendations,
            inventory_optimization: OptimizationSection {
                reorder_points,
                optimal_quantities,
            },
        })
    }
}

fn inventory_health(inventory: &InventorySnapshot) -> InventoryHealth {
    InventoryHealth {
        total_inventory_value: inventory
            .values()
            .map(|l| l.quantity_on_hand * l.unit_cost)
            .sum(),
        stock_outs: inventory
            .values()
            .filter(|l| l.quantity_on_hand == 0.0)
            .count(),
        overstock_items: inventory
            .values()
            .filter(|l| l.quantity_on_hand > l.max_stock_level)
            .count(),
    }
}

fn recommend(
    inventory: &InventorySnapshot,
    reorder_points: &BTreeMap<ProductId, ReorderPolicy>,
    optimal_quantities: &BTreeMap<ProductId, OrderQuantityPlan>,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    for (product, level) in inventory {
        // Both maps are keyed by the same snapshot, so the lookups hold.
        let reorder_point = reorder_points[product].reorder_point;
        let eoq = optimal_quantities[product].eoq;

        // The reorder check wins over the reduce check when both could
        // apply; that precedence is part of the contract.
        if let Some(rec) = recommend_product(product, level, reorder_point, eoq) {
            recommendations.push(rec);
        }
    }
    recommendations
}

fn recommend_product(
    product: &ProductId,
    level: &InventoryLevel,
    reorder_point: f64,
    eoq: f64,
) -> Option<Recommendation> {
    if level.quantity_on_hand <= reorder_point {
        let urgency = if level.quantity_on_hand == 0.0 {
            Urgency::High
        } else {
            Urgency::Medium
        };
        return Some(Recommendation {
            product: product.clone(),
            action: Action::Reorder,
            quantity: eoq,
            urgency,
        });
    }
    if level.quantity_on_hand > level.max_stock_level {
        return Some(Recommendation {
            product: product.clone(),
            action: Action::Reduce,
            quantity: level.quantity_on_hand - level.max_stock_level,
            urgency: Urgency::Low,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(quantity: f64, max_stock: f64) -> InventoryLevel {
        InventoryLevel {
            quantity_on_hand: quantity,
            unit_cost: 10.0,
            ordering_cost: 25.0,
            max_stock_level: max_stock,
        }
    }

    fn product() -> ProductId {
        "widget".into()
    }

    #[test]
    fn stock_out_reorders_with_high_urgency() {
        let rec = recommend_product(&product(), &level(0.0, 500.0), 120.0, 80.0).unwrap();
        assert_eq!(rec.action, Action::Reorder);
        assert_eq!(rec.urgency, Urgency::High);
        assert_eq!(rec.quantity, 80.0);
    }

    #[test]
    fn below_reorder_point_reorders_with_medium_urgency() {
        let rec = recommend_product(&product(), &level(119.0, 500.0), 120.0, 80.0).unwrap();
        assert_eq!(rec.action, Action::Reorder);
        assert_eq!(rec.urgency, Urgency::Medium);
    }

    #[test]
    fn overstock_reduces_by_the_excess() {
        let rec = recommend_product(&product(), &level(620.0, 500.0), 120.0, 80.0).unwrap();
        assert_eq!(rec.action, Action::Reduce);
        assert_eq!(rec.urgency, Urgency::Low);
        assert_eq!(rec.quantity, 120.0);
    }

    #[test]
    fn healthy_stock_yields_nothing() {
        assert!(recommend_product(&product(), &level(300.0, 500.0), 120.0, 80.0).is_none());
    }

    #[test]
    fn reorder_takes_precedence_over_reduce() {
        // Degenerate data where both conditions hold: stock under the
        // reorder point but above max. The reorder branch must win.
        let rec = recommend_product(&product(), &level(90.0, 50.0), 120.0, 80.0).unwrap();
        assert_eq!(rec.action, Action::Reorder);
    }

    #[test]
    fn health_metrics_count_stock_outs_and_overstock() {
        let inventory = InventorySnapshot::from([
            ("a".into(), level(0.0, 100.0)),
            ("b".into(), level(50.0, 100.0)),
            ("c".into(), level(150.0, 100.0)),
        ]);
        let health = inventory_health(&inventory);

        assert_eq!(health.stock_outs, 1);
        assert_eq!(health.overstock_items, 1);
        assert!((health.total_inventory_value - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn actions_serialize_as_uppercase_strings() {
        assert_eq!(serde_json::to_string(&Action::Reorder).unwrap(), "\"REORDER\"");
        assert_eq!(serde_json::to_string(&Action::Reduce).unwrap(), "\"REDUCE\"");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"HIGH\"");
        assert_eq!(serde_json::to_string(&Urgency::Medium).unwrap(), "\"MEDIUM\"");
        assert_eq!(serde_json::to_string(&Urgency::Low).unwrap(), "\"LOW\"");
    }
}
