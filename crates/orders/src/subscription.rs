//! Subscription pattern analysis.
//!
//! The churn-risk and health formulas are a business decision owned by the
//! integrating team, so they live behind [`SubscriptionPolicy`] rather
//! than being hardcoded here. Policies must be deterministic functions of
//! the subscription set and perform no I/O.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpulse_core::stats::mean;

use crate::order::SubscriptionRecord;

/// Summary returned by subscription analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionMetrics {
    /// Raw size of the subscription set. The `active` flag feeds the
    /// policy scores, not this count.
    pub active_subscriptions: usize,
    pub churn_risk: f64,
    pub subscription_health: f64,
}

/// Pluggable scoring seam for subscription analysis.
pub trait SubscriptionPolicy {
    /// Likelihood of churn across the set, conventionally in \[0, 1\].
    fn churn_risk(&self, subscriptions: &[SubscriptionRecord]) -> f64;

    /// Overall health of the subscription base, conventionally in \[0, 1\].
    fn subscription_health(&self, subscriptions: &[SubscriptionRecord]) -> f64;
}

/// Placeholder policy so the pipeline runs end to end.
///
/// Not a product formula: churn risk is the inactive share of the set, and
/// health is the mean active tenure capped at one year. Integrators are
/// expected to supply their own [`SubscriptionPolicy`].
#[derive(Debug, Clone, Copy)]
pub struct BasicSubscriptionPolicy {
    /// Reference date for tenure; explicit so results are deterministic.
    pub as_of: NaiveDate,
}

impl BasicSubscriptionPolicy {
    pub fn new(as_of: NaiveDate) -> Self {
        Self { as_of }
    }
}

impl SubscriptionPolicy for BasicSubscriptionPolicy {
    fn churn_risk(&self, subscriptions: &[SubscriptionRecord]) -> f64 {
        if subscriptions.is_empty() {
            return 0.0;
        }
        let inactive = subscriptions.iter().filter(|s| !s.active).count();
        inactive as f64 / subscriptions.len() as f64
    }

    fn subscription_health(&self, subscriptions: &[SubscriptionRecord]) -> f64 {
        let tenures: Vec<f64> = subscriptions
            .iter()
            .filter(|s| s.active)
            .map(|s| (self.as_of - s.started_at).num_days().max(0) as f64)
            .collect();
        if tenures.is_empty() {
            return 0.0;
        }
        (mean(&tenures) / 365.0).min(1.0)
    }
}

pub(crate) fn analyze_subscriptions(
    subscriptions: &[SubscriptionRecord],
    policy: &dyn SubscriptionPolicy,
) -> SubscriptionMetrics {
    SubscriptionMetrics {
        active_subscriptions: subscriptions.len(),
        churn_risk: policy.churn_risk(subscriptions),
        subscription_health: policy.subscription_health(subscriptions),
    }
}
