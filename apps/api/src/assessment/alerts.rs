use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessment::alignment::analyze_alignment;
use crate::assessment::flight_risk::{score_flight_risk, RiskLevel};
use crate::models::employee::Employee;
use crate::models::plan::{ActionItemStatus, EmployeePlan};
use crate::models::review::PerformanceReview;
use crate::planning::progress::effective_status;

/// Dashboard badges for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAlerts {
    pub pending_review: bool,
    pub pending_manager_review: bool,
    pub pending_self_review: bool,
    pub misaligned: bool,
    pub needs_plan: bool,
    pub plan_overdue_count: usize,
    pub flight_risk_level: RiskLevel,
}

pub fn compute_alerts(
    employee: &Employee,
    reviews: &[PerformanceReview],
    plan: Option<&EmployeePlan>,
    now: DateTime<Utc>,
) -> EmployeeAlerts {
    let own_reviews: Vec<PerformanceReview> = reviews
        .iter()
        .filter(|r| r.employee_id == employee.id)
        .cloned()
        .collect();
    let alignment = analyze_alignment(&own_reviews);

    let active_plan = plan.filter(|p| p.employee_id == employee.id && p.is_active());
    let has_plan = active_plan.is_some();

    let plan_overdue_count = active_plan
        .map(|p| {
            p.action_items
                .iter()
                .filter(|item| effective_status(item, now) == ActionItemStatus::Overdue)
                .count()
        })
        .unwrap_or(0);

    EmployeeAlerts {
        pending_review: alignment.manager_pending || alignment.self_pending,
        pending_manager_review: alignment.manager_pending,
        pending_self_review: alignment.self_pending,
        misaligned: alignment.misaligned,
        needs_plan: employee.assessment.is_some() && !has_plan,
        plan_overdue_count,
        flight_risk_level: score_flight_risk(employee, has_plan, now).risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{Assessment, Level};
    use crate::models::plan::{ActionItem, Owner, PlanStatus, PlanType, Priority};
    use crate::models::review::{ManagerRating, ReviewStatus, ReviewType, SelfScores};
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn employee(assessed: bool) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Priya Natarajan".to_string(),
            department_id: None,
            joined_at: now() - Duration::days(900),
            assessment: assessed.then(|| Assessment::new(Level::Medium, Level::Medium)),
        }
    }

    fn item(due_in_days: i64, completed: bool) -> ActionItem {
        ActionItem {
            id: Uuid::new_v4(),
            description: "Complete course".to_string(),
            skill_area: "Technical".to_string(),
            due_date: now() + Duration::days(due_in_days),
            owner: Owner::Employee,
            priority: Priority::Medium,
            estimated_hours: 4,
            status: if completed {
                ActionItemStatus::Completed
            } else {
                ActionItemStatus::InProgress
            },
            completed,
            completed_date: completed.then(now),
        }
    }

    fn plan(employee_id: Uuid, items: Vec<ActionItem>) -> EmployeePlan {
        EmployeePlan {
            id: Uuid::new_v4(),
            employee_id,
            plan_type: PlanType::Development,
            title: "Development plan".to_string(),
            objectives: vec![],
            action_items: items,
            success_metrics: vec![],
            status: PlanStatus::Active,
            progress_percentage: 0,
            timeline: "6 months".to_string(),
            next_review_date: None,
            retention: None,
        }
    }

    #[test]
    fn test_assessed_without_plan_needs_plan() {
        let e = employee(true);
        let alerts = compute_alerts(&e, &[], None, now());
        assert!(alerts.needs_plan);
        assert!(alerts.pending_review);
        assert_eq!(alerts.plan_overdue_count, 0);
    }

    #[test]
    fn test_unassessed_does_not_need_plan() {
        let e = employee(false);
        assert!(!compute_alerts(&e, &[], None, now()).needs_plan);
    }

    #[test]
    fn test_overdue_items_are_counted() {
        let e = employee(true);
        let p = plan(e.id, vec![item(-3, false), item(-10, true), item(5, false), item(-1, false)]);
        let alerts = compute_alerts(&e, &[], Some(&p), now());
        assert!(!alerts.needs_plan);
        assert_eq!(alerts.plan_overdue_count, 2);
    }

    #[test]
    fn test_reviews_for_other_employees_are_ignored() {
        let e = employee(true);
        let other = Uuid::new_v4();
        let reviews = vec![
            PerformanceReview {
                id: Uuid::new_v4(),
                employee_id: other,
                review_type: ReviewType::Manager,
                status: ReviewStatus::Completed,
                summary_rating: Some(ManagerRating::NotPerforming),
                self_scores: None,
                submitted_at: None,
            },
            PerformanceReview {
                id: Uuid::new_v4(),
                employee_id: e.id,
                review_type: ReviewType::SelfReview,
                status: ReviewStatus::Submitted,
                summary_rating: None,
                self_scores: Some(SelfScores {
                    goals: Some(5.0),
                    competencies: Some(5.0),
                    values: Some(5.0),
                }),
                submitted_at: None,
            },
        ];
        let alerts = compute_alerts(&e, &reviews, None, now());
        assert!(alerts.pending_manager_review);
        assert!(!alerts.pending_self_review);
        assert!(!alerts.misaligned);
    }
}
