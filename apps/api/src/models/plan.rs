use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanType {
    Development,
    PerformanceImprovement,
    Retention,
    Succession,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanStatus {
    Draft,
    #[default]
    Active,
    OnHold,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Employee,
    Manager,
    #[serde(rename = "HR", alias = "Hr", alias = "hr")]
    Hr,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Resting states of an action item. `Overdue` is only ever produced by
/// `planning::progress::effective_status` and is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Blocked,
    Completed,
    Overdue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: Uuid,
    pub description: String,
    pub skill_area: String,
    pub due_date: DateTime<Utc>,
    pub owner: Owner,
    pub priority: Priority,
    pub estimated_hours: u32,
    pub status: ActionItemStatus,
    pub completed: bool,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionStrategy {
    CompensationReview,
    CareerPathing,
    Mentorship,
    FlexibleWork,
    Recognition,
    Ltip,
    ExpandedScope,
}

/// Retention-specific extension of a plan. All free text is caller-owned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetentionPlanData {
    #[serde(default)]
    pub stay_interview_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub stay_interview_notes: Option<String>,
    #[serde(default)]
    pub strategies: Vec<RetentionStrategy>,
    /// `None` when eligibility has not been determined yet.
    #[serde(default)]
    pub ltip_eligible: Option<bool>,
    #[serde(default)]
    pub career_aspirations: Option<String>,
    #[serde(default)]
    pub concerns: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeePlan {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub plan_type: PlanType,
    pub title: String,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub action_items: Vec<ActionItem>,
    #[serde(default)]
    pub success_metrics: Vec<String>,
    #[serde(default)]
    pub status: PlanStatus,
    #[serde(default)]
    pub progress_percentage: u8,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub next_review_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub retention: Option<RetentionPlanData>,
}

impl EmployeePlan {
    /// A plan counts towards "has a plan" until it is completed or cancelled.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, PlanStatus::Completed | PlanStatus::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_serializes_hr_uppercase() {
        assert_eq!(serde_json::to_string(&Owner::Hr).unwrap(), r#""HR""#);
        let o: Owner = serde_json::from_str(r#""Manager""#).unwrap();
        assert_eq!(o, Owner::Manager);
    }

    #[test]
    fn test_action_item_uses_camel_case_fields() {
        let item = ActionItem {
            id: Uuid::new_v4(),
            description: "Shadow a senior leader".to_string(),
            skill_area: "Leadership".to_string(),
            due_date: Utc::now(),
            owner: Owner::Employee,
            priority: Priority::High,
            estimated_hours: 8,
            status: ActionItemStatus::NotStarted,
            completed: false,
            completed_date: None,
        };
        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("dueDate").is_some());
        assert!(value.get("skillArea").is_some());
        assert_eq!(value["status"], "not_started");
    }

    #[test]
    fn test_plan_activity() {
        let mut plan = EmployeePlan {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            plan_type: PlanType::Development,
            title: "Growth plan".to_string(),
            objectives: vec![],
            action_items: vec![],
            success_metrics: vec![],
            status: PlanStatus::Draft,
            progress_percentage: 0,
            timeline: "6 months".to_string(),
            next_review_date: None,
            retention: None,
        };
        assert!(plan.is_active());
        plan.status = PlanStatus::Completed;
        assert!(!plan.is_active());
    }
}
