//! Lead scoring engine and the service plumbing around it.
//!
//! The [`scoring`] module owns all decision logic: feature scorers, weighted
//! aggregation, status classification, factor ranking, and explanation
//! rendering. The remaining modules carry the runtime concerns shared with
//! the HTTP service (configuration, telemetry, error mapping).

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
