//! Plan progress — action-item state machine and plan aggregate status.
//!
//! Every function returns the proposed next value; nothing here assumes the
//! caller's write will succeed.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::plan::{ActionItem, ActionItemStatus, EmployeePlan, PlanStatus};

/// Status as displayed: a stored status, or `Overdue` when the item is
/// incomplete and past its due date.
pub fn effective_status(item: &ActionItem, now: DateTime<Utc>) -> ActionItemStatus {
    if !item.completed && now > item.due_date {
        ActionItemStatus::Overdue
    } else {
        item.status
    }
}

/// Sets or clears the completed flag.
pub fn toggle_completed(item: &ActionItem, completed: bool, now: DateTime<Utc>) -> ActionItem {
    let mut next = item.clone();
    next.completed = completed;
    if completed {
        next.status = ActionItemStatus::Completed;
        next.completed_date = Some(now);
    } else {
        next.completed_date = None;
        if item.status == ActionItemStatus::Completed {
            next.status = ActionItemStatus::InProgress;
        }
    }
    next
}

fn can_transition(from: ActionItemStatus, to: ActionItemStatus) -> bool {
    use ActionItemStatus::*;
    matches!(
        (from, to),
        (NotStarted, InProgress | Blocked | Completed)
            | (InProgress, NotStarted | Blocked | Completed)
            | (Blocked, NotStarted | InProgress)
            | (Completed, InProgress)
    )
}

/// Explicit status change. `Overdue` is derived and can never be set.
pub fn set_status(
    item: &ActionItem,
    status: ActionItemStatus,
    now: DateTime<Utc>,
) -> Result<ActionItem, EngineError> {
    if item.status == status && status != ActionItemStatus::Overdue {
        return Ok(item.clone());
    }
    if !can_transition(item.status, status) {
        return Err(EngineError::InvalidTransition {
            from: item.status,
            to: status,
        });
    }

    match status {
        ActionItemStatus::Completed => Ok(toggle_completed(item, true, now)),
        _ => {
            let mut next = toggle_completed(item, false, now);
            next.status = status;
            Ok(next)
        }
    }
}

pub fn calculate_plan_progress(items: &[ActionItem]) -> u8 {
    if items.is_empty() {
        return 0;
    }
    let completed = items.iter().filter(|i| i.completed).count();
    (100.0 * completed as f64 / items.len() as f64).round() as u8
}

pub fn next_plan_status(current: PlanStatus, progress: u8) -> PlanStatus {
    if progress >= 100 {
        PlanStatus::Completed
    } else if current == PlanStatus::Completed {
        PlanStatus::Active
    } else {
        current
    }
}

/// Recomputes progress and aggregate status after `action_items` changed.
pub fn refresh_plan(plan: &EmployeePlan) -> EmployeePlan {
    let mut next = plan.clone();
    next.progress_percentage = calculate_plan_progress(&next.action_items);
    next.status = next_plan_status(plan.status, next.progress_percentage);
    next
}

/// Toggles one item of a plan and returns the proposed next plan.
pub fn toggle_item(
    plan: &EmployeePlan,
    item_id: Uuid,
    completed: bool,
    now: DateTime<Utc>,
) -> Result<EmployeePlan, EngineError> {
    update_item(plan, item_id, |item| Ok(toggle_completed(item, completed, now)))
}

/// Moves one item of a plan to `status` and returns the proposed next plan.
pub fn set_item_status(
    plan: &EmployeePlan,
    item_id: Uuid,
    status: ActionItemStatus,
    now: DateTime<Utc>,
) -> Result<EmployeePlan, EngineError> {
    update_item(plan, item_id, |item| set_status(item, status, now))
}

fn update_item<F>(plan: &EmployeePlan, item_id: Uuid, f: F) -> Result<EmployeePlan, EngineError>
where
    F: FnOnce(&ActionItem) -> Result<ActionItem, EngineError>,
{
    let index = plan
        .action_items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or(EngineError::ActionItemNotFound(item_id))?;

    let mut next = plan.clone();
    next.action_items[index] = f(&plan.action_items[index])?;
    Ok(refresh_plan(&next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::{Owner, PlanType, Priority};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 2, 10, 0, 0).unwrap()
    }

    fn item(status: ActionItemStatus, due_in_days: i64) -> ActionItem {
        ActionItem {
            id: Uuid::new_v4(),
            description: "Finish certification".to_string(),
            skill_area: "Technical Skills".to_string(),
            due_date: now() + Duration::days(due_in_days),
            owner: Owner::Employee,
            priority: Priority::Medium,
            estimated_hours: 10,
            status,
            completed: status == ActionItemStatus::Completed,
            completed_date: None,
        }
    }

    fn plan(items: Vec<ActionItem>, status: PlanStatus) -> EmployeePlan {
        EmployeePlan {
            id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            plan_type: PlanType::Development,
            title: "Plan".to_string(),
            objectives: vec![],
            action_items: items,
            success_metrics: vec![],
            status,
            progress_percentage: 0,
            timeline: "6 months".to_string(),
            next_review_date: None,
            retention: None,
        }
    }

    #[test]
    fn test_progress_empty_is_zero() {
        assert_eq!(calculate_plan_progress(&[]), 0);
    }

    #[test]
    fn test_progress_half_and_full() {
        let mut items = vec![
            item(ActionItemStatus::Completed, 5),
            item(ActionItemStatus::Completed, 5),
            item(ActionItemStatus::NotStarted, 5),
            item(ActionItemStatus::InProgress, 5),
        ];
        assert_eq!(calculate_plan_progress(&items), 50);
        for i in items.iter_mut() {
            *i = toggle_completed(i, true, now());
        }
        assert_eq!(calculate_plan_progress(&items), 100);
    }

    #[test]
    fn test_progress_rounds() {
        let items = vec![
            item(ActionItemStatus::Completed, 5),
            item(ActionItemStatus::NotStarted, 5),
            item(ActionItemStatus::NotStarted, 5),
        ];
        assert_eq!(calculate_plan_progress(&items), 33);
    }

    #[test]
    fn test_toggle_on_sets_completed_date() {
        let done = toggle_completed(&item(ActionItemStatus::InProgress, 5), true, now());
        assert!(done.completed);
        assert_eq!(done.status, ActionItemStatus::Completed);
        assert_eq!(done.completed_date, Some(now()));
    }

    #[test]
    fn test_toggle_off_reverts_completed_to_in_progress() {
        let done = toggle_completed(&item(ActionItemStatus::NotStarted, 5), true, now());
        let undone = toggle_completed(&done, false, now());
        assert!(!undone.completed);
        assert_eq!(undone.status, ActionItemStatus::InProgress);
        assert!(undone.completed_date.is_none());
    }

    #[test]
    fn test_toggle_off_preserves_other_status() {
        let blocked = item(ActionItemStatus::Blocked, 5);
        let next = toggle_completed(&blocked, false, now());
        assert_eq!(next.status, ActionItemStatus::Blocked);
    }

    #[test]
    fn test_overdue_is_derived_only() {
        let late = item(ActionItemStatus::InProgress, -1);
        assert_eq!(effective_status(&late, now()), ActionItemStatus::Overdue);
        assert_eq!(late.status, ActionItemStatus::InProgress);

        let done_late = toggle_completed(&late, true, now());
        assert_eq!(effective_status(&done_late, now()), ActionItemStatus::Completed);

        assert!(set_status(&late, ActionItemStatus::Overdue, now()).is_err());
    }

    #[test]
    fn test_status_transitions() {
        let fresh = item(ActionItemStatus::NotStarted, 5);
        let started = set_status(&fresh, ActionItemStatus::InProgress, now()).unwrap();
        let blocked = set_status(&started, ActionItemStatus::Blocked, now()).unwrap();
        assert_eq!(
            set_status(&blocked, ActionItemStatus::Completed, now()),
            Err(EngineError::InvalidTransition {
                from: ActionItemStatus::Blocked,
                to: ActionItemStatus::Completed,
            })
        );
        let resumed = set_status(&blocked, ActionItemStatus::InProgress, now()).unwrap();
        let done = set_status(&resumed, ActionItemStatus::Completed, now()).unwrap();
        assert!(done.completed);
        assert_eq!(done.completed_date, Some(now()));

        let reopened = set_status(&done, ActionItemStatus::InProgress, now()).unwrap();
        assert!(!reopened.completed);
        assert!(reopened.completed_date.is_none());
    }

    #[test]
    fn test_plan_status_follows_progress() {
        assert_eq!(next_plan_status(PlanStatus::Active, 100), PlanStatus::Completed);
        assert_eq!(next_plan_status(PlanStatus::Completed, 75), PlanStatus::Active);
        assert_eq!(next_plan_status(PlanStatus::OnHold, 50), PlanStatus::OnHold);
        assert_eq!(next_plan_status(PlanStatus::Draft, 0), PlanStatus::Draft);
    }

    #[test]
    fn test_toggle_item_completes_and_reopens_plan() {
        let a = item(ActionItemStatus::Completed, 5);
        let b = item(ActionItemStatus::InProgress, 5);
        let b_id = b.id;
        let p = plan(vec![a, b], PlanStatus::Active);

        let finished = toggle_item(&p, b_id, true, now()).unwrap();
        assert_eq!(finished.progress_percentage, 100);
        assert_eq!(finished.status, PlanStatus::Completed);

        let reopened = toggle_item(&finished, b_id, false, now()).unwrap();
        assert_eq!(reopened.progress_percentage, 50);
        assert_eq!(reopened.status, PlanStatus::Active);
        // input left untouched
        assert_eq!(p.progress_percentage, 0);
    }

    #[test]
    fn test_toggle_unknown_item() {
        let p = plan(vec![item(ActionItemStatus::NotStarted, 5)], PlanStatus::Active);
        let missing = Uuid::new_v4();
        assert_eq!(
            toggle_item(&p, missing, true, now()),
            Err(EngineError::ActionItemNotFound(missing))
        );
    }

    #[test]
    fn test_set_item_status_recomputes_plan() {
        let a = item(ActionItemStatus::NotStarted, 5);
        let id = a.id;
        let p = plan(vec![a], PlanStatus::Active);
        let next = set_item_status(&p, id, ActionItemStatus::Completed, now()).unwrap();
        assert_eq!(next.status, PlanStatus::Completed);
        assert_eq!(next.progress_percentage, 100);
    }
}
