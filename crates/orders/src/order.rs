use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use stockpulse_core::{Category, CustomerId, OrderId, ProductId, SubscriberId};

/// Raw order row as it arrives in a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub products: Vec<ProductId>,
    pub total_amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// Order row with derived time and customer-history features.
///
/// Enrichment never drops or reorders rows: the enriched set has exactly
/// one row per input order, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedOrder {
    #[serde(flatten)]
    pub order: OrderRecord,
    /// Hour of day (0..=23) from the order timestamp.
    pub hour: u32,
    /// Weekday with Monday = 0 .. Sunday = 6.
    pub day_of_week: u32,
    /// Number of orders this customer has in the input set.
    pub customer_order_count: usize,
    /// Mean `total_amount` over this customer's orders in the input set.
    pub customer_avg_amount: f64,
}

impl EnrichedOrder {
    pub(crate) fn derive(
        order: &OrderRecord,
        customer_order_count: usize,
        customer_avg_amount: f64,
    ) -> Self {
        Self {
            hour: order.timestamp.hour(),
            day_of_week: order.timestamp.weekday().num_days_from_monday(),
            customer_order_count,
            customer_avg_amount,
            order: order.clone(),
        }
    }
}

/// One observation of category-level demand, used for forecasting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub category: Category,
    pub date: NaiveDate,
    pub quantity: f64,
}

/// Per-subscriber row for churn/health analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    pub subscriber_id: SubscriberId,
    pub started_at: NaiveDate,
    pub monthly_amount: f64,
    pub active: bool,
}
