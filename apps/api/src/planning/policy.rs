//! Plan-type policy and the defaults that follow from it.

use crate::models::employee::Level;
use crate::models::plan::PlanType;

/// Low performers go on a performance improvement plan; everyone else gets a
/// development plan. Missing performance counts as medium.
pub fn plan_type_for(performance: Option<Level>) -> PlanType {
    match performance.unwrap_or_default() {
        Level::Low => PlanType::PerformanceImprovement,
        Level::Medium | Level::High => PlanType::Development,
    }
}

pub fn default_timeline(plan_type: PlanType) -> &'static str {
    match plan_type {
        PlanType::PerformanceImprovement => "60 days",
        PlanType::Retention => "90 days",
        PlanType::Development => "6 months",
        PlanType::Succession => "12 months",
    }
}

pub fn default_plan_title(plan_type: PlanType, employee_name: &str) -> String {
    let kind = match plan_type {
        PlanType::Development => "Development Plan",
        PlanType::PerformanceImprovement => "Performance Improvement Plan",
        PlanType::Retention => "Retention Plan",
        PlanType::Succession => "Succession Plan",
    };
    format!("{kind} for {employee_name}")
}

pub fn default_success_metrics(plan_type: PlanType) -> Vec<String> {
    let metrics: &[&str] = match plan_type {
        PlanType::PerformanceImprovement => &[
            "Meets all agreed 30-day targets",
            "No repeat of documented performance gaps",
            "Manager rating of meets expectations or above at plan close",
        ],
        PlanType::Development => &[
            "Completes all high-priority action items on time",
            "Demonstrates new skills in day-to-day work",
            "Positive peer and manager feedback at next review",
        ],
        PlanType::Retention => &[
            "Stay interview completed and concerns addressed",
            "Flight risk level reduced at next assessment",
            "Employee reports improved engagement",
        ],
        PlanType::Succession => &[
            "Ready-now assessment for the target role",
            "Successful delivery of a leadership-level initiative",
        ],
    };
    metrics.iter().map(|m| m.to_string()).collect()
}
