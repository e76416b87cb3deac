//! Analytics error model.

use thiserror::Error;

/// Result type used across the analytics crates.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Analytics-level error.
///
/// Failures here are deterministic input problems: malformed values and
/// inputs too small for a defined statistic. There is no retry and no
/// partial-result recovery; the first failure propagates to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A parameter or input value failed validation (e.g. zero unit cost,
    /// non-finite amount).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Not enough data points to compute a defined statistic.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

impl AnalysisError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn insufficient_data(msg: impl Into<String>) -> Self {
        Self::InsufficientData(msg.into())
    }
}
