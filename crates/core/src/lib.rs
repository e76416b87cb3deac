//! `stockpulse-core` — shared analytics foundation.
//!
//! This crate contains **pure** building blocks (no I/O, no runtime):
//! typed identifiers, the error model, and the deterministic numeric
//! helpers the analytics crates share.

pub mod error;
pub mod id;
pub mod stats;

pub use error::{AnalysisError, AnalysisResult};
pub use id::{Category, CustomerId, OrderId, ProductId, SubscriberId};
