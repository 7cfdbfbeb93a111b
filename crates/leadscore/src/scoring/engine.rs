use serde::{Deserialize, Serialize};

use super::domain::{Feature, Lead, LeadId, LeadStatus};
use super::explain::score_explanation;
use super::factors::{top_contributing_factors, Factor};
use super::features;
use super::validation::{validate_lead, LeadValidationError};
use super::weights::ScoringWeights;

/// Default top-level category weights.
const CATEGORY_WEIGHT_COMPANY: f64 = 0.4;
const CATEGORY_WEIGHT_CONTACT: f64 = 0.4;
const CATEGORY_WEIGHT_BEHAVIOR: f64 = 0.2;
/// When a lead carries no behavior signal at all, its 0.2 share is split
/// evenly between the two remaining categories.
const CATEGORY_WEIGHT_REDISTRIBUTED: f64 = 0.5;

/// Callers surface at most this many contributing factors.
const TOP_FACTOR_LIMIT: usize = 5;

/// One scored feature, in computation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScore {
    pub feature: Feature,
    pub score: f64,
}

/// Per-category scores on the 0-100 scale, reported independently of any
/// top-level weight redistribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub company: i64,
    pub contact: i64,
    pub behavior: i64,
}

/// Raw scoring output: the final score plus the per-category and
/// per-feature breakdowns that feed ranking and explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: i64,
    pub category_scores: CategoryScores,
    pub feature_scores: Vec<FeatureScore>,
}

/// Composite caller-facing outcome: score, tier, ranked factors (top 5),
/// and the rendered explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadEvaluation {
    pub lead_id: LeadId,
    pub status: LeadStatus,
    pub total_score: i64,
    pub category_scores: CategoryScores,
    pub feature_scores: Vec<FeatureScore>,
    pub top_factors: Vec<Factor>,
    pub explanation: String,
}

/// Stateless scorer holding the weight set applied to every lead.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    weights: ScoringWeights,
}

impl ScoringEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        weights.warn_if_unbalanced();
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single lead. Fails fast on malformed numeric input before
    /// producing any output.
    pub fn score(&self, lead: &Lead) -> Result<ScoreResult, LeadValidationError> {
        validate_lead(lead)?;
        Ok(compute_scores(lead, &self.weights))
    }

    /// Full pipeline: score, rank contributing factors, render the
    /// explanation, classify. Factors are truncated to the top five.
    pub fn evaluate(&self, lead: &Lead) -> Result<LeadEvaluation, LeadValidationError> {
        let result = self.score(lead)?;
        let mut top_factors = top_contributing_factors(&result.feature_scores, &self.weights);
        top_factors.truncate(TOP_FACTOR_LIMIT);
        let explanation =
            score_explanation(result.total_score, &result.category_scores, &top_factors);
        let status = LeadStatus::from_score(result.total_score);

        Ok(LeadEvaluation {
            lead_id: lead.id.clone(),
            status,
            total_score: result.total_score,
            category_scores: result.category_scores,
            feature_scores: result.feature_scores,
            top_factors,
            explanation,
        })
    }
}

/// The aggregation pipeline. Company and contact features are evaluated
/// unconditionally; behavior features only when the underlying signal is
/// present on the lead.
fn compute_scores(lead: &Lead, weights: &ScoringWeights) -> ScoreResult {
    let mut feature_scores = Vec::with_capacity(14);

    let mut company_score = 0.0;
    let size_score = features::score_company_size(lead.company.size);
    feature_scores.push(FeatureScore {
        feature: Feature::CompanySize,
        score: size_score,
    });
    company_score += size_score * weights.company.size;

    let industry_score = features::score_industry(&lead.company.industry);
    feature_scores.push(FeatureScore {
        feature: Feature::Industry,
        score: industry_score,
    });
    company_score += industry_score * weights.company.industry;

    let funding_score = features::score_funding_stage(lead.company.funding_stage.as_deref());
    feature_scores.push(FeatureScore {
        feature: Feature::FundingStage,
        score: funding_score,
    });
    company_score += funding_score * weights.company.funding_stage;

    let revenue_score = features::score_annual_revenue(lead.company.annual_revenue);
    feature_scores.push(FeatureScore {
        feature: Feature::AnnualRevenue,
        score: revenue_score,
    });
    company_score += revenue_score * weights.company.annual_revenue;

    let growth_score = features::score_growth_rate(lead.company.growth_rate);
    feature_scores.push(FeatureScore {
        feature: Feature::GrowthRate,
        score: growth_score,
    });
    company_score += growth_score * weights.company.growth_rate;

    let stack_score = features::score_technology_stack(lead.company.technology_stack.as_deref());
    feature_scores.push(FeatureScore {
        feature: Feature::TechnologyStack,
        score: stack_score,
    });
    company_score += stack_score * weights.company.technology_stack;

    let mut contact_score = 0.0;
    let position_score = features::score_position(&lead.contact.position);
    feature_scores.push(FeatureScore {
        feature: Feature::Position,
        score: position_score,
    });
    contact_score += position_score * weights.contact.position;

    let seniority_score = features::score_seniority(&lead.contact.seniority);
    feature_scores.push(FeatureScore {
        feature: Feature::Seniority,
        score: seniority_score,
    });
    contact_score += seniority_score * weights.contact.seniority;

    let department_score = features::score_department(&lead.contact.department);
    feature_scores.push(FeatureScore {
        feature: Feature::Department,
        score: department_score,
    });
    contact_score += department_score * weights.contact.department;

    let mut behavior_score = 0.0;
    let mut behavior_factors_present: u32 = 0;
    if let Some(behavior) = &lead.behavior {
        if behavior.website_visits.is_some() {
            let score = features::score_website_visits(behavior.website_visits);
            feature_scores.push(FeatureScore {
                feature: Feature::WebsiteVisits,
                score,
            });
            behavior_score += score * weights.behavior.website_visits;
            behavior_factors_present += 1;
        }

        if behavior.content_downloads.is_some() {
            let score = features::score_content_downloads(behavior.content_downloads);
            feature_scores.push(FeatureScore {
                feature: Feature::ContentDownloads,
                score,
            });
            behavior_score += score * weights.behavior.content_downloads;
            behavior_factors_present += 1;
        }

        if behavior.email_engagement.is_some() {
            let score = features::score_engagement(behavior.email_engagement);
            feature_scores.push(FeatureScore {
                feature: Feature::EmailEngagement,
                score,
            });
            behavior_score += score * weights.behavior.email_engagement;
            behavior_factors_present += 1;
        }

        if behavior.social_engagement.is_some() {
            let score = features::score_engagement(behavior.social_engagement);
            feature_scores.push(FeatureScore {
                feature: Feature::SocialEngagement,
                score,
            });
            behavior_score += score * weights.behavior.social_engagement;
            behavior_factors_present += 1;
        }

        if behavior.event_attendance.is_some() {
            let score = features::score_event_attendance(behavior.event_attendance);
            feature_scores.push(FeatureScore {
                feature: Feature::EventAttendance,
                score,
            });
            behavior_score += score * weights.behavior.event_attendance;
            behavior_factors_present += 1;
        }
    }

    // The behavior weights sum to ~1 over five features, but only the
    // present subset was accumulated; dividing by the present count and
    // scaling by five puts the category back on the same magnitude as the
    // unconditional company/contact sums. Keep this formula exact.
    if behavior_factors_present > 0 {
        behavior_score = behavior_score / f64::from(behavior_factors_present) * 5.0;
    }

    let (company_weight, contact_weight) = if behavior_factors_present == 0 {
        (CATEGORY_WEIGHT_REDISTRIBUTED, CATEGORY_WEIGHT_REDISTRIBUTED)
    } else {
        (CATEGORY_WEIGHT_COMPANY, CATEGORY_WEIGHT_CONTACT)
    };

    let mut weighted = company_score * company_weight + contact_score * contact_weight;
    if behavior_factors_present > 0 {
        weighted += behavior_score * CATEGORY_WEIGHT_BEHAVIOR;
    }

    ScoreResult {
        total_score: round_percent(weighted),
        category_scores: CategoryScores {
            company: round_percent(company_score),
            contact: round_percent(contact_score),
            behavior: round_percent(behavior_score),
        },
        feature_scores,
    }
}

fn round_percent(raw: f64) -> i64 {
    (raw * 100.0).round() as i64
}
