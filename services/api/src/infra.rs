use leadscore::error::AppError;
use leadscore::scoring::ScoringWeights;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load a weights override document; absent path means the built-in
/// defaults. A partial document fills unspecified categories from the
/// defaults as well.
pub(crate) fn load_weights(path: Option<&Path>) -> Result<ScoringWeights, AppError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let weights = serde_json::from_str(&raw)?;
            Ok(weights)
        }
        None => Ok(ScoringWeights::default()),
    }
}
