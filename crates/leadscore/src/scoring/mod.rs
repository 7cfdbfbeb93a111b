//! Lead scoring pipeline: feature scorers, weighted aggregation, status
//! classification, factor ranking, and explanation rendering.
//!
//! Every operation here is a pure function over an immutable [`Lead`]; the
//! engine holds nothing but the weight set it was built with, so concurrent
//! scoring calls need no coordination.

pub mod domain;
pub mod engine;
pub mod explain;
pub mod factors;
mod features;
pub mod import;
pub mod router;
pub mod validation;
pub mod weights;

#[cfg(test)]
mod tests;

pub use domain::{
    BehaviorSignals, CompanyProfile, ContactProfile, Feature, Lead, LeadId, LeadStatus, Seniority,
};
pub use engine::{CategoryScores, FeatureScore, LeadEvaluation, ScoreResult, ScoringEngine};
pub use explain::score_explanation;
pub use factors::{top_contributing_factors, Factor};
pub use import::{LeadCsvImporter, LeadImportError};
pub use router::scoring_router;
pub use validation::{validate_lead, LeadValidationError};
pub use weights::{BehaviorWeights, CompanyWeights, ContactWeights, ScoringWeights};
