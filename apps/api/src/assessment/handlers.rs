//! Axum route handlers for the Assessment API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::assessment::alerts::{compute_alerts, EmployeeAlerts};
use crate::assessment::distribution::{grid_distribution, GridDistribution};
use crate::assessment::flight_risk::{score_flight_risk, RiskAssessment};
use crate::assessment::grid::{parse_box_key, place, place_at};
use crate::errors::AppError;
use crate::models::employee::{Assessment, Department, Employee, Level};
use crate::models::plan::EmployeePlan;
use crate::models::review::PerformanceReview;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Grid coordinates (from a drop on the grid), a box key, or labels.
#[derive(Debug, Deserialize)]
pub struct PlaceRequest {
    pub box_key: Option<String>,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub performance: Option<Level>,
    pub potential: Option<Level>,
}

#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    pub employee: Employee,
    pub has_plan: bool,
}

#[derive(Debug, Deserialize)]
pub struct AlertsRequest {
    pub employee: Employee,
    #[serde(default)]
    pub reviews: Vec<PerformanceReview>,
    pub plan: Option<EmployeePlan>,
}

#[derive(Debug, Deserialize)]
pub struct DistributionRequest {
    pub employees: Vec<Employee>,
    pub department: Option<Department>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assessments/place
pub async fn handle_place(Json(request): Json<PlaceRequest>) -> Result<Json<Assessment>, AppError> {
    let assessment = match (request.x, request.y, request.box_key.as_deref()) {
        (Some(x), Some(y), _) => place_at(x, y)?,
        (None, None, Some(key)) => {
            let (performance, potential) = parse_box_key(key)?;
            Assessment::new(performance, potential)
        }
        (None, None, None) => place(request.performance, request.potential),
        _ => {
            return Err(AppError::Validation(
                "x and y must be supplied together".to_string(),
            ))
        }
    };
    Ok(Json(assessment))
}

/// POST /api/v1/assessments/risk
pub async fn handle_risk(
    State(state): State<AppState>,
    Json(request): Json<RiskRequest>,
) -> Json<RiskAssessment> {
    Json(score_flight_risk(
        &request.employee,
        request.has_plan,
        state.clock.now(),
    ))
}

/// POST /api/v1/assessments/alerts
pub async fn handle_alerts(
    State(state): State<AppState>,
    Json(request): Json<AlertsRequest>,
) -> Json<EmployeeAlerts> {
    Json(compute_alerts(
        &request.employee,
        &request.reviews,
        request.plan.as_ref(),
        state.clock.now(),
    ))
}

/// POST /api/v1/assessments/distribution
pub async fn handle_distribution(Json(request): Json<DistributionRequest>) -> Json<GridDistribution> {
    Json(grid_distribution(&request.employees, request.department.as_ref()))
}
