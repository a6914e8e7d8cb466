use std::sync::Arc;

use crate::analysis::pipeline::NarrativeAnalysisPipeline;
use crate::clock::Clock;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub clock: Arc<dyn Clock>,
    /// Owns the per-employee in-flight set, so it must be shared, not cloned.
    pub pipeline: Arc<NarrativeAnalysisPipeline>,
}
