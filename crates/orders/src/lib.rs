//! `stockpulse-orders`
//!
//! **Responsibility:** order-stream analytics.
//!
//! Enriches raw orders with time and customer-history features, scores
//! them for fraud risk, summarizes per-product demand, forecasts
//! category-level demand by linear trend, and summarizes subscription
//! churn. Every operation is a pure, synchronous transformation over the
//! snapshot it is given; nothing here holds state across calls.

pub mod enrich;
pub mod forecast;
pub mod fraud;
pub mod impact;
pub mod order;
pub mod subscription;

use serde::{Deserialize, Serialize};

use stockpulse_core::{AnalysisResult, Category};

pub use enrich::enrich_orders;
pub use fraud::{FraudDetector, FraudScore, MIN_FIT_ORDERS};
pub use impact::InventoryImpact;
pub use order::{DemandRecord, EnrichedOrder, OrderRecord, SubscriptionRecord};
pub use subscription::{BasicSubscriptionPolicy, SubscriptionMetrics, SubscriptionPolicy};

/// Default forecast horizon in periods.
pub const DEFAULT_FORECAST_PERIODS: usize = 30;

/// Combined output of [`OrderAnalysis::process_orders`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedOrders {
    /// One score per input order, positionally aligned.
    pub fraud_detection: Vec<FraudScore>,
    pub inventory_impact: InventoryImpact,
}

/// Order analytics facade. Holds configuration only, so sharing an
/// instance across threads is safe: each call fits its own model.
#[derive(Debug, Clone, Copy)]
pub struct OrderAnalysis {
    contamination: f64,
}

impl Default for OrderAnalysis {
    fn default() -> Self {
        Self {
            contamination: 0.01,
        }
    }
}

impl OrderAnalysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected outlier fraction for fraud scoring (default 0.01).
    pub fn with_contamination(mut self, contamination: f64) -> Self {
        self.contamination = contamination;
        self
    }

    /// Enrich, fraud-score, and demand-summarize an order batch.
    pub fn process_orders(&self, orders: &[OrderRecord]) -> AnalysisResult<ProcessedOrders> {
        let enriched = enrich::enrich_orders(orders);
        let fraud_detection = FraudDetector::new(self.contamination).score(&enriched)?;
        let inventory_impact = impact::analyze_inventory_impact(orders);

        tracing::debug!(
            orders = orders.len(),
            anomalies = fraud_detection.iter().filter(|s| s.is_anomaly()).count(),
            products = inventory_impact.demand_distribution.len(),
            "order batch processed"
        );

        Ok(ProcessedOrders {
            fraud_detection,
            inventory_impact,
        })
    }

    /// Forecast per-category demand `forecast_periods` steps ahead.
    pub fn forecast_demand(
        &self,
        history: &[DemandRecord],
        forecast_periods: usize,
    ) -> AnalysisResult<std::collections::BTreeMap<Category, Vec<f64>>> {
        forecast::forecast_demand(history, forecast_periods)
    }

    /// [`Self::forecast_demand`] with the default 30-period horizon.
    pub fn forecast_demand_default(
        &self,
        history: &[DemandRecord],
    ) -> AnalysisResult<std::collections::BTreeMap<Category, Vec<f64>>> {
        self.forecast_demand(history, DEFAULT_FORECAST_PERIODS)
    }

    /// Summarize subscription churn risk and health under `policy`.
    pub fn analyze_subscription_patterns(
        &self,
        subscriptions: &[SubscriptionRecord],
        policy: &dyn SubscriptionPolicy,
    ) -> SubscriptionMetrics {
        let metrics = subscription::analyze_subscriptions(subscriptions, policy);
        tracing::debug!(
            subscriptions = metrics.active_subscriptions,
            churn_risk = metrics.churn_risk,
            "subscription patterns analyzed"
        );
        metrics
    }
}
