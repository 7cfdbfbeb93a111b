use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{Lead, LeadStatus};
use super::engine::{CategoryScores, FeatureScore, ScoringEngine};
use super::factors::Factor;
use super::weights::ScoringWeights;

/// Router builder exposing the HTTP scoring endpoint.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/api/v1/leads/score", post(score_handler))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreLeadRequest {
    pub(crate) lead: Lead,
    /// Optional per-request weight overrides; the server default applies
    /// otherwise.
    #[serde(default)]
    pub(crate) weights: Option<ScoringWeights>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ScoreLeadResponse {
    pub(crate) success: bool,
    pub(crate) score: i64,
    pub(crate) status: LeadStatus,
    pub(crate) category_scores: CategoryScores,
    pub(crate) top_factors: Vec<Factor>,
    pub(crate) explanation: String,
    pub(crate) feature_scores: Vec<FeatureScore>,
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    axum::Json(request): axum::Json<ScoreLeadRequest>,
) -> Response {
    let outcome = match request.weights {
        Some(weights) => ScoringEngine::new(weights).evaluate(&request.lead),
        None => engine.evaluate(&request.lead),
    };

    match outcome {
        Ok(evaluation) => {
            let payload = ScoreLeadResponse {
                success: true,
                score: evaluation.total_score,
                status: evaluation.status,
                category_scores: evaluation.category_scores,
                top_factors: evaluation.top_factors,
                explanation: evaluation.explanation,
                feature_scores: evaluation.feature_scores,
            };
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "success": false,
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
