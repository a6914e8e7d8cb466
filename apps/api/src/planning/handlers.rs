//! Axum route handlers for the Planning API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::flight_risk::{score_flight_risk, RiskAssessment, RiskLevel};
use crate::errors::AppError;
use crate::models::employee::{Employee, Level};
use crate::models::plan::{ActionItem, ActionItemStatus, EmployeePlan, RetentionPlanData};
use crate::planning::progress::{set_item_status, toggle_item};
use crate::planning::retention::{build_retention_plan, generate_retention_actions};
use crate::planning::templates::generate_action_items;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TemplatesRequest {
    pub performance: Option<Level>,
    pub potential: Option<Level>,
    pub employee_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RetentionActionsRequest {
    pub employee_name: String,
    pub factors: Vec<String>,
    pub risk_level: RiskLevel,
}

#[derive(Debug, Deserialize)]
pub struct RetentionPlanRequest {
    pub employee: Employee,
    pub has_plan: bool,
    #[serde(default)]
    pub data: RetentionPlanData,
}

#[derive(Debug, Serialize)]
pub struct RetentionPlanResponse {
    pub risk: RiskAssessment,
    pub plan: EmployeePlan,
}

#[derive(Debug, Deserialize)]
pub struct ToggleItemRequest {
    pub plan: EmployeePlan,
    pub item_id: Uuid,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct ItemStatusRequest {
    pub plan: EmployeePlan,
    pub item_id: Uuid,
    pub status: ActionItemStatus,
}

fn require_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation(
            "employee_name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/plans/templates
///
/// Action items from the 9-box decision table. Missing levels default to medium.
pub async fn handle_templates(
    State(state): State<AppState>,
    Json(request): Json<TemplatesRequest>,
) -> Result<Json<Vec<ActionItem>>, AppError> {
    require_name(&request.employee_name)?;
    Ok(Json(generate_action_items(
        request.performance,
        request.potential,
        request.employee_name.trim(),
        state.clock.now(),
    )))
}

/// POST /api/v1/plans/retention-actions
pub async fn handle_retention_actions(
    State(state): State<AppState>,
    Json(request): Json<RetentionActionsRequest>,
) -> Result<Json<Vec<ActionItem>>, AppError> {
    require_name(&request.employee_name)?;
    let now = state.clock.now();
    let items = generate_retention_actions(&request.factors, request.risk_level)
        .iter()
        .map(|a| a.instantiate(request.employee_name.trim(), now))
        .collect();
    Ok(Json(items))
}

/// POST /api/v1/plans/retention
///
/// Scores flight risk and proposes a retention plan. Nothing is persisted.
pub async fn handle_retention_plan(
    State(state): State<AppState>,
    Json(request): Json<RetentionPlanRequest>,
) -> Json<RetentionPlanResponse> {
    let now = state.clock.now();
    let risk = score_flight_risk(&request.employee, request.has_plan, now);
    let plan = build_retention_plan(&request.employee, &risk, request.data, now);
    Json(RetentionPlanResponse { risk, plan })
}

/// POST /api/v1/plans/toggle-item
pub async fn handle_toggle_item(
    State(state): State<AppState>,
    Json(request): Json<ToggleItemRequest>,
) -> Result<Json<EmployeePlan>, AppError> {
    let plan = toggle_item(
        &request.plan,
        request.item_id,
        request.completed,
        state.clock.now(),
    )?;
    Ok(Json(plan))
}

/// POST /api/v1/plans/item-status
pub async fn handle_item_status(
    State(state): State<AppState>,
    Json(request): Json<ItemStatusRequest>,
) -> Result<Json<EmployeePlan>, AppError> {
    let plan = set_item_status(
        &request.plan,
        request.item_id,
        request.status,
        state.clock.now(),
    )?;
    Ok(Json(plan))
}
