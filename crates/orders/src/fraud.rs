//! Unsupervised fraud scoring over enriched orders.
//!
//! Model:
//! - Build a feature vector per order from {amount, hour, weekday,
//!   customer order count, customer mean amount}.
//! - Standardize each feature column against the batch (zero-variance
//!   columns contribute nothing).
//! - Score each order by the Euclidean norm of its standardized vector and
//!   flag the top `ceil(contamination * n)` as anomalies.
//!
//! The detector is value-in/value-out: it is fit on exactly the batch it
//! scores, holds no state across calls, and is safe to share.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockpulse_core::{AnalysisError, AnalysisResult};

use crate::order::EnrichedOrder;

/// Minimum batch size for a meaningful fit. Below this the column
/// statistics are dominated by noise and the output is unstable.
pub const MIN_FIT_ORDERS: usize = 8;

const FEATURES: usize = 5;

/// Per-order fraud classification, positionally aligned with the input.
///
/// Serializes as the sentinel integers `-1` (anomaly) / `1` (normal) that
/// downstream consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FraudScore {
    Anomaly,
    Normal,
}

impl FraudScore {
    pub fn sentinel(self) -> i8 {
        match self {
            FraudScore::Anomaly => -1,
            FraudScore::Normal => 1,
        }
    }

    pub fn is_anomaly(self) -> bool {
        matches!(self, FraudScore::Anomaly)
    }
}

impl Serialize for FraudScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.sentinel())
    }
}

impl<'de> Deserialize<'de> for FraudScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match i8::deserialize(deserializer)? {
            -1 => Ok(FraudScore::Anomaly),
            1 => Ok(FraudScore::Normal),
            other => Err(D::Error::custom(format!(
                "invalid fraud sentinel {other} (expected -1 or 1)"
            ))),
        }
    }
}

/// Batch anomaly detector with a configured expected outlier fraction.
#[derive(Debug, Clone, Copy)]
pub struct FraudDetector {
    contamination: f64,
}

impl FraudDetector {
    pub fn new(contamination: f64) -> Self {
        Self { contamination }
    }

    /// Fit on the batch and classify every order in it.
    ///
    /// The output has exactly one score per input row, in input order.
    pub fn score(&self, orders: &[EnrichedOrder]) -> AnalysisResult<Vec<FraudScore>> {
        if !(self.contamination.is_finite() && self.contamination > 0.0 && self.contamination < 1.0)
        {
            return Err(AnalysisError::validation(format!(
                "contamination must be in (0, 1), got {}",
                self.contamination
            )));
        }
        if orders.len() < MIN_FIT_ORDERS {
            return Err(AnalysisError::insufficient_data(format!(
                "fraud scoring needs at least {MIN_FIT_ORDERS} orders, got {}",
                orders.len()
            )));
        }

        let features = feature_matrix(orders)?;
        let distances = standardized_distances(&features);

        // ceil(contamination * n) rows are flagged; ranking ties at the
        // cutoff go to the earlier row.
        let outliers = (self.contamination * orders.len() as f64).ceil() as usize;
        let mut ranked: Vec<usize> = (0..orders.len()).collect();
        ranked.sort_by(|&a, &b| {
            distances[b]
                .partial_cmp(&distances[a])
                .unwrap_or(core::cmp::Ordering::Equal)
                .then(a.cmp(&b))
        });

        let mut scores = vec![FraudScore::Normal; orders.len()];
        for &idx in ranked.iter().take(outliers) {
            scores[idx] = FraudScore::Anomaly;
        }
        Ok(scores)
    }
}

fn feature_matrix(orders: &[EnrichedOrder]) -> AnalysisResult<Vec<[f64; FEATURES]>> {
    orders
        .iter()
        .map(|row| {
            if !row.order.total_amount.is_finite() {
                return Err(AnalysisError::validation(format!(
                    "order {} has non-finite total_amount",
                    row.order.order_id
                )));
            }
            Ok([
                row.order.total_amount,
                row.hour as f64,
                row.day_of_week as f64,
                row.customer_order_count as f64,
                row.customer_avg_amount,
            ])
        })
        .collect()
}

/// Euclidean norm of each row after per-column z-score standardization.
fn standardized_distances(features: &[[f64; FEATURES]]) -> Vec<f64> {
    let mut col_mean = [0.0f64; FEATURES];
    let mut col_std = [0.0f64; FEATURES];

    for col in 0..FEATURES {
        let values: Vec<f64> = features.iter().map(|row| row[col]).collect();
        col_mean[col] = stockpulse_core::stats::mean(&values);
        col_std[col] = stockpulse_core::stats::stddev_sample(&values);
    }

    features
        .iter()
        .map(|row| {
            let mut sq = 0.0;
            for col in 0..FEATURES {
                if col_std[col] > f64::EPSILON {
                    let z = (row[col] - col_mean[col]) / col_std[col];
                    sq += z * z;
                }
            }
            sq.sqrt()
        })
        .collect()
}
