//! Order enrichment: time features plus per-customer history aggregates.

use std::collections::HashMap;

use stockpulse_core::CustomerId;

use crate::order::{EnrichedOrder, OrderRecord};

/// Join per-customer aggregates (order count, mean amount over the input
/// set) and timestamp features onto every order.
///
/// Row count and row order are preserved. A customer with no prior orders
/// outside the set still gets aggregates from its own rows, so a first
/// order counts as one data point.
pub fn enrich_orders(orders: &[OrderRecord]) -> Vec<EnrichedOrder> {
    let mut history: HashMap<&CustomerId, (usize, f64)> = HashMap::new();
    for order in orders {
        let entry = history.entry(&order.customer_id).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += order.total_amount;
    }

    orders
        .iter()
        .map(|order| {
            // Entry is guaranteed present: the first pass saw every row.
            let (count, sum) = history[&order.customer_id];
            EnrichedOrder::derive(order, count, sum / count as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn order(id: &str, customer: &str, amount: f64, hour: u32) -> OrderRecord {
        OrderRecord {
            order_id: id.into(),
            customer_id: customer.into(),
            products: vec!["sku-1".into()],
            total_amount: amount,
            // 2024-01-01 is a Monday.
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, hour, 30, 0).unwrap(),
        }
    }

    #[test]
    fn preserves_row_count_and_order() {
        let orders = vec![
            order("o1", "alice", 10.0, 9),
            order("o2", "bob", 20.0, 10),
            order("o3", "alice", 30.0, 11),
        ];
        let enriched = enrich_orders(&orders);

        assert_eq!(enriched.len(), orders.len());
        for (raw, row) in orders.iter().zip(&enriched) {
            assert_eq!(row.order.order_id, raw.order_id);
        }
    }

    #[test]
    fn customer_aggregates_join_onto_every_row() {
        let orders = vec![
            order("o1", "alice", 100.0, 9),
            order("o2", "alice", 200.0, 10),
            order("o3", "alice", 300.0, 11),
            order("o4", "bob", 50.0, 12),
        ];
        let enriched = enrich_orders(&orders);

        for row in enriched.iter().take(3) {
            assert_eq!(row.customer_order_count, 3);
            assert!((row.customer_avg_amount - 200.0).abs() < 1e-12);
        }
        assert_eq!(enriched[3].customer_order_count, 1);
        assert_eq!(enriched[3].customer_avg_amount, 50.0);
    }

    #[test]
    fn time_features_follow_timestamp() {
        let enriched = enrich_orders(&[order("o1", "alice", 10.0, 14)]);
        assert_eq!(enriched[0].hour, 14);
        assert_eq!(enriched[0].day_of_week, 0); // Monday
    }
}
