//! Axum route handler for narrative analysis.

use axum::{extract::State, Json};
use tokio_util::sync::CancellationToken;

use crate::analysis::{AnalysisRequest, NarrativeAnalysis};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/analysis/narrative
///
/// Always answers with a normalised analysis unless another analysis for the
/// same employee is running (409). If the client goes away, the handler
/// future is dropped, the drop guard cancels the token and the result is
/// discarded.
pub async fn handle_analyze_narrative(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<NarrativeAnalysis>, AppError> {
    if request.review_text.trim().is_empty() {
        return Err(AppError::Validation("review_text cannot be empty".to_string()));
    }
    if request.employee_name.trim().is_empty() {
        return Err(AppError::Validation(
            "employee_name cannot be empty".to_string(),
        ));
    }

    let token = CancellationToken::new();
    let _cancel_on_drop = token.clone().drop_guard();

    let analysis = state.pipeline.analyze(&request, &token).await?;
    Ok(Json(analysis))
}
