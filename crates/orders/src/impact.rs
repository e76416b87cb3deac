//! Inventory impact of an order batch.
//!
//! The order→products relation is exploded so each (order, product) pair
//! counts once; an order listing the same product twice counts twice, as
//! upstream consumers expect from the row-level aggregation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockpulse_core::ProductId;

use crate::order::OrderRecord;

/// How many products the high-demand list reports.
const TOP_PRODUCTS: usize = 5;

/// Demand summary derived from the order batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryImpact {
    /// Top products by order count, descending. Ties are broken by first
    /// appearance in the input (stable with respect to row order).
    pub high_demand_products: Vec<ProductId>,
    /// Total exploded (order, product) row count.
    pub total_product_demand: u64,
    /// Full per-product order-count map.
    pub demand_distribution: BTreeMap<ProductId, u64>,
}

pub fn analyze_inventory_impact(orders: &[OrderRecord]) -> InventoryImpact {
    // count + first-seen position per product; first-seen drives the
    // documented tie-break for the top list.
    let mut counts: BTreeMap<ProductId, (u64, usize)> = BTreeMap::new();
    let mut next_seen = 0usize;

    for order in orders {
        for product in &order.products {
            let entry = counts.entry(product.clone()).or_insert_with(|| {
                let slot = (0, next_seen);
                next_seen += 1;
                slot
            });
            entry.0 += 1;
        }
    }

    let total_product_demand: u64 = counts.values().map(|(count, _)| count).sum();

    let mut ranked: Vec<(&ProductId, u64, usize)> = counts
        .iter()
        .map(|(product, &(count, seen))| (product, count, seen))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    InventoryImpact {
        high_demand_products: ranked
            .iter()
            .take(TOP_PRODUCTS)
            .map(|(product, _, _)| (*product).clone())
            .collect(),
        total_product_demand,
        demand_distribution: counts
            .into_iter()
            .map(|(product, (count, _))| (product, count))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, products: &[&str]) -> OrderRecord {
        OrderRecord {
            order_id: id.into(),
            customer_id: "c1".into(),
            products: products.iter().map(|p| (*p).into()).collect(),
            total_amount: 10.0,
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn counts_exploded_rows() {
        let orders = vec![
            order("o1", &["a", "b"]),
            order("o2", &["a"]),
            order("o3", &["a", "b", "c"]),
        ];
        let impact = analyze_inventory_impact(&orders);

        assert_eq!(impact.total_product_demand, 6);
        assert_eq!(impact.demand_distribution[&ProductId::from("a")], 3);
        assert_eq!(impact.demand_distribution[&ProductId::from("b")], 2);
        assert_eq!(impact.demand_distribution[&ProductId::from("c")], 1);
    }

    #[test]
    fn top_list_sorted_descending_ties_by_first_appearance() {
        // "z" and "a" tie at 2; "z" appears first in the input so it ranks
        // ahead despite sorting after "a" lexicographically.
        let orders = vec![
            order("o1", &["z", "a"]),
            order("o2", &["z", "a"]),
            order("o3", &["m", "m", "m"]),
        ];
        let impact = analyze_inventory_impact(&orders);

        assert_eq!(
            impact.high_demand_products,
            vec!["m".into(), "z".into(), "a".into()]
        );
    }

    #[test]
    fn top_list_caps_at_five() {
        let orders: Vec<OrderRecord> = (0..8)
            .map(|i| order(&format!("o{i}"), &[&format!("p{i}")]))
            .collect();
        let impact = analyze_inventory_impact(&orders);
        assert_eq!(impact.high_demand_products.len(), 5);
    }

    #[test]
    fn empty_batch_is_empty_impact() {
        let impact = analyze_inventory_impact(&[]);
        assert!(impact.high_demand_products.is_empty());
        assert_eq!(impact.total_product_demand, 0);
        assert!(impact.demand_distribution.is_empty());
    }
}
