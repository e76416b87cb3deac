//! End-to-end inventory report over a small realistic snapshot.

use chrono::NaiveDate;
use stockpulse_core::ProductId;
use stockpulse_inventory::{
    Action, InventoryLevel, InventoryOptimizer, InventorySnapshot, SalesRecord, Urgency,
};

fn snapshot() -> InventorySnapshot {
    InventorySnapshot::from([
        (
            // Stocked out, steady demand: must come back as REORDER/HIGH.
            "kettle".into(),
            InventoryLevel {
                quantity_on_hand: 0.0,
                unit_cost: 18.0,
                ordering_cost: 40.0,
                max_stock_level: 300.0,
            },
        ),
        (
            // Comfortable stock level: no recommendation expected.
            "mug".into(),
            InventoryLevel {
                quantity_on_hand: 400.0,
                unit_cost: 4.0,
                ordering_cost: 15.0,
                max_stock_level: 600.0,
            },
        ),
        (
            // Way above max stock: REDUCE by the excess.
            "spoon".into(),
            InventoryLevel {
                quantity_on_hand: 900.0,
                unit_cost: 1.0,
                ordering_cost: 10.0,
                max_stock_level: 500.0,
            },
        ),
    ])
}

fn history() -> Vec<SalesRecord> {
    let mut records = Vec::new();
    for day in 1..=14u32 {
        let date = NaiveDate::from_ymd_opt(2024, 2, day).unwrap();
        for (product, base) in [("kettle", 6.0), ("mug", 11.0), ("spoon", 3.0)] {
            records.push(SalesRecord {
                product: product.into(),
                date,
                quantity: base + (day % 3) as f64,
            });
        }
    }
    records
}

#[test]
fn report_combines_optimization_health_and_recommendations() {
    let report = InventoryOptimizer::new()
        .generate_inventory_report(&snapshot(), &history())
        .unwrap();

    assert_eq!(report.inventory_optimization.reorder_points.len(), 3);
    assert_eq!(report.inventory_optimization.optimal_quantities.len(), 3);

    assert_eq!(report.inventory_health.stock_outs, 1);
    assert_eq!(report.inventory_health.overstock_items, 1);
    // 0*18 + 400*4 + 900*1
    assert!((report.inventory_health.total_inventory_value - 2500.0).abs() < 1e-9);

    let kettle = report
        .recommendations
        .iter()
        .find(|r| r.product.as_str() == "kettle")
        .expect("stocked-out product must be recommended");
    assert_eq!(kettle.action, Action::Reorder);
    assert_eq!(kettle.urgency, Urgency::High);
    let kettle_eoq = report.inventory_optimization.optimal_quantities[&ProductId::from("kettle")].eoq;
    assert_eq!(kettle.quantity, kettle_eoq);

    let spoon = report
        .recommendations
        .iter()
        .find(|r| r.product.as_str() == "spoon")
        .expect("overstocked product must be recommended");
    assert_eq!(spoon.action, Action::Reduce);
    assert_eq!(spoon.urgency, Urgency::Low);
    assert_eq!(spoon.quantity, 400.0);

    assert!(
        !report
            .recommendations
            .iter()
            .any(|r| r.product.as_str() == "mug")
    );
}

#[test]
fn report_serializes_with_the_contract_field_names() {
    let report = InventoryOptimizer::new()
        .generate_inventory_report(&snapshot(), &history())
        .unwrap();
    let value = serde_json::to_value(&report).unwrap();

    let kettle_policy = &value["inventory_optimization"]["reorder_points"]["kettle"];
    assert!(kettle_policy.get("reorder_point").is_some());
    assert!(kettle_policy.get("safety_stock").is_some());
    assert!(kettle_policy.get("avg_daily_demand").is_some());

    let kettle_plan = &value["inventory_optimization"]["optimal_quantities"]["kettle"];
    assert!(kettle_plan.get("eoq").is_some());
    assert!(kettle_plan.get("annual_demand").is_some());
    assert!(kettle_plan.get("total_annual_cost").is_some());

    let first = &value["recommendations"][0];
    assert!(first.get("action").is_some());
    assert!(first.get("urgency").is_some());
    assert_eq!(first["action"], "REORDER");
    assert_eq!(first["urgency"], "HIGH");
}

#[test]
fn per_call_rate_override_changes_the_plan() {
    let optimizer = InventoryOptimizer::new();
    let default_plan = optimizer
        .optimize_order_quantities(&snapshot(), &history())
        .unwrap();
    let steep_plan = optimizer
        .optimize_order_quantities_with_rate(&snapshot(), &history(), 0.8)
        .unwrap();

    // Higher carrying cost pushes the optimal order quantity down.
    let default_eoq = default_plan[&ProductId::from("kettle")].eoq;
    let steep_eoq = steep_plan[&ProductId::from("kettle")].eoq;
    assert!(steep_eoq < default_eoq);
    // rate x4 => eoq halves.
    assert!((steep_eoq - default_eoq / 2.0).abs() < 1e-9);
}
