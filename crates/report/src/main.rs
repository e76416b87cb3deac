//! `stockpulse-report` — run every stockpulse analysis over a JSON
//! snapshot file and print one combined JSON report to stdout.
//!
//! Glue only: all computation lives in the library crates. Sections whose
//! input is absent from the snapshot come back as `null`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};

use stockpulse_inventory::{InventoryOptimizer, InventorySnapshot, SalesRecord};
use stockpulse_orders::{
    BasicSubscriptionPolicy, DemandRecord, OrderAnalysis, OrderRecord, SubscriptionRecord,
};

#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    orders: Vec<OrderRecord>,
    #[serde(default)]
    demand_history: Vec<DemandRecord>,
    #[serde(default)]
    sales_history: Vec<SalesRecord>,
    #[serde(default)]
    inventory: InventorySnapshot,
    #[serde(default)]
    subscriptions: Vec<SubscriptionRecord>,
}

fn main() -> Result<()> {
    stockpulse_observability::init();

    let path = parse_args()?;
    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    let report = build_report(&snapshot)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_args() -> Result<PathBuf> {
    let mut args = std::env::args_os().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        bail!("usage: stockpulse-report <snapshot.json>");
    };
    Ok(PathBuf::from(path))
}

fn build_report(snapshot: &Snapshot) -> Result<Value> {
    let analysis = OrderAnalysis::new();

    let processed = if snapshot.orders.is_empty() {
        Value::Null
    } else {
        let processed = analysis
            .process_orders(&snapshot.orders)
            .context("order processing failed")?;
        serde_json::to_value(processed)?
    };

    let forecast = if snapshot.demand_history.is_empty() {
        Value::Null
    } else {
        let forecast = analysis
            .forecast_demand_default(&snapshot.demand_history)
            .context("demand forecasting failed")?;
        serde_json::to_value(forecast)?
    };

    let subscriptions = if snapshot.subscriptions.is_empty() {
        Value::Null
    } else {
        let policy = BasicSubscriptionPolicy::new(Utc::now().date_naive());
        serde_json::to_value(
            analysis.analyze_subscription_patterns(&snapshot.subscriptions, &policy),
        )?
    };

    let inventory = if snapshot.inventory.is_empty() {
        Value::Null
    } else {
        let report = InventoryOptimizer::new()
            .generate_inventory_report(&snapshot.inventory, &snapshot.sales_history)
            .context("inventory report failed")?;
        serde_json::to_value(report)?
    };

    tracing::info!(
        orders = snapshot.orders.len(),
        products = snapshot.inventory.len(),
        subscriptions = snapshot.subscriptions.len(),
        "snapshot analyzed"
    );

    Ok(json!({
        "order_analysis": processed,
        "demand_forecast": forecast,
        "subscription_metrics": subscriptions,
        "inventory_report": inventory,
    }))
}
