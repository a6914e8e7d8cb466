pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::assessment::handlers as assessment;
use crate::planning::handlers as planning;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/assessments/place", post(assessment::handle_place))
        .route("/api/v1/assessments/risk", post(assessment::handle_risk))
        .route("/api/v1/assessments/alerts", post(assessment::handle_alerts))
        .route(
            "/api/v1/assessments/distribution",
            post(assessment::handle_distribution),
        )
        // Planning API
        .route("/api/v1/plans/templates", post(planning::handle_templates))
        .route(
            "/api/v1/plans/retention-actions",
            post(planning::handle_retention_actions),
        )
        .route(
            "/api/v1/plans/retention",
            post(planning::handle_retention_plan),
        )
        .route(
            "/api/v1/plans/toggle-item",
            post(planning::handle_toggle_item),
        )
        .route(
            "/api/v1/plans/item-status",
            post(planning::handle_item_status),
        )
        // Analysis API
        .route(
            "/api/v1/analysis/narrative",
            post(analysis::handle_analyze_narrative),
        )
        .with_state(state)
}
