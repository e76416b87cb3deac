//! Category demand forecasting by linear trend extrapolation.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use stockpulse_core::stats::linear_fit;
use stockpulse_core::{AnalysisError, AnalysisResult, Category};

use crate::order::DemandRecord;

/// Forecast per-category demand for `forecast_periods` further steps.
///
/// Per category the history is summed by date, ordered by date, and fit
/// with a degree-1 least-squares line over sequential positions. Calendar
/// gaps are not modeled: day 5 follows day 4 of the series regardless of
/// how far apart the dates are.
///
/// Known limitation (kept intentionally): predictions are not clamped, so
/// a declining trend can forecast negative demand.
pub fn forecast_demand(
    history: &[DemandRecord],
    forecast_periods: usize,
) -> AnalysisResult<BTreeMap<Category, Vec<f64>>> {
    let mut by_category: BTreeMap<&Category, BTreeMap<NaiveDate, f64>> = BTreeMap::new();
    for record in history {
        if !record.quantity.is_finite() {
            return Err(AnalysisError::validation(format!(
                "demand for category {} on {} is non-finite",
                record.category, record.date
            )));
        }
        *by_category
            .entry(&record.category)
            .or_default()
            .entry(record.date)
            .or_insert(0.0) += record.quantity;
    }

    let mut forecasts = BTreeMap::new();
    for (category, daily) in by_category {
        // BTreeMap iteration gives the series in date order.
        let series: Vec<f64> = daily.into_values().collect();
        let (slope, intercept) = linear_fit(&series);

        let start = series.len();
        let predicted: Vec<f64> = (start..start + forecast_periods)
            .map(|pos| slope * pos as f64 + intercept)
            .collect();
        forecasts.insert(category.clone(), predicted);
    }
    Ok(forecasts)
}
