use serde::{Deserialize, Serialize};

use super::engine::FeatureScore;
use super::weights::ScoringWeights;

/// A feature's contribution to the final score, used for ranking and
/// explanation only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub factor: String,
    pub impact: i64,
}

/// Rank every scored feature by `score * weight * 100`, highest first.
///
/// Returns the full list; callers that only want the headline factors do
/// their own truncation. The sort is stable, so ties keep the engine's
/// computation order (company, then contact, then behavior).
pub fn top_contributing_factors(
    feature_scores: &[FeatureScore],
    weights: &ScoringWeights,
) -> Vec<Factor> {
    let mut factors: Vec<Factor> = feature_scores
        .iter()
        .map(|entry| {
            let weight = weights.weight_for(entry.feature);
            Factor {
                factor: entry.feature.label().to_string(),
                impact: (entry.score * weight * 100.0).round() as i64,
            }
        })
        .collect();

    factors.sort_by(|a, b| b.impact.cmp(&a.impact));
    factors
}
