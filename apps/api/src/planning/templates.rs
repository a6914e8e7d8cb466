//! Action plan templates — the 9-box decision table.
//!
//! Policy lives in `PLAYBOOK` as data, indexed `[performance][potential]`.
//! Low/low emphasises documentation and exit-track items, high/high
//! emphasises succession and retention, and the middle of the grid gets
//! steady-state development.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::models::employee::Level;
use crate::models::plan::{ActionItem, ActionItemStatus, Owner, Priority};

use Owner::{Employee as E, Hr as H, Manager as M};
use Priority::{High as HI, Low as LO, Medium as MD};

/// Due dates land between one day and ten years out.
pub const MAX_DAYS_TO_COMPLETE: i64 = 3650;

/// One row of the decision table. `{name}` in the description is replaced
/// with the employee's display name.
#[derive(Debug, Clone, Copy)]
pub struct ActionTemplate {
    pub description: &'static str,
    pub skill_area: &'static str,
    pub priority: Priority,
    pub days_to_complete: i64,
    pub estimated_hours: u32,
    pub owner: Owner,
}

pub(crate) const fn t(
    description: &'static str,
    skill_area: &'static str,
    priority: Priority,
    days_to_complete: i64,
    estimated_hours: u32,
    owner: Owner,
) -> ActionTemplate {
    ActionTemplate {
        description,
        skill_area,
        priority,
        days_to_complete,
        estimated_hours,
        owner,
    }
}

#[rustfmt::skip]
const LOW_LOW: &[ActionTemplate] = &[
    t("Document specific performance gaps for {name} with dated examples", "Performance Management", HI, 7, 3, M),
    t("Hold a formal expectations meeting with {name} and HR present", "Communication", HI, 14, 2, M),
    t("Set 30-day measurable improvement targets for {name}", "Goal Setting", HI, 14, 2, M),
    t("Run weekly check-ins to track {name}'s progress against targets", "Performance Management", HI, 30, 6, M),
    t("Review role fit and prepare transition or exit options for {name}", "Workforce Planning", MD, 60, 4, H),
    t("Complete the 60-day documented outcome review for {name}", "Performance Management", HI, 60, 2, H),
];

#[rustfmt::skip]
const MEDIUM_LOW: &[ActionTemplate] = &[
    t("Agree on clear role expectations and quality standards with {name}", "Goal Setting", MD, 14, 2, M),
    t("Identify one core skill for {name} to strengthen in the current role", "Skill Development", MD, 30, 4, E),
    t("Complete a role-specific training module", "Technical Skills", MD, 45, 8, E),
    t("Hold a monthly feedback conversation on consistency of output", "Communication", LO, 30, 3, M),
    t("Assess whether a lateral move would better fit {name}'s strengths", "Career Development", LO, 90, 2, H),
];

#[rustfmt::skip]
const HIGH_LOW: &[ActionTemplate] = &[
    t("Recognise {name}'s consistent results in a team forum", "Recognition", MD, 14, 1, M),
    t("Assign {name} as subject-matter mentor for a newer colleague", "Knowledge Sharing", MD, 30, 10, M),
    t("Document {name}'s critical processes for knowledge transfer", "Knowledge Management", MD, 60, 12, E),
    t("Explore deepening expertise through an advanced certification", "Technical Skills", LO, 120, 20, E),
    t("Benchmark compensation against market for retained expertise", "Compensation", MD, 45, 2, H),
];

#[rustfmt::skip]
const LOW_MEDIUM: &[ActionTemplate] = &[
    t("Diagnose root causes of {name}'s inconsistent performance", "Performance Management", HI, 7, 2, M),
    t("Set clear 30-day goals with measurable outcomes for {name}", "Goal Setting", HI, 14, 2, M),
    t("Pair {name} with a peer mentor for day-to-day support", "Mentorship", MD, 21, 6, M),
    t("Complete targeted training on the identified skill gaps", "Skill Development", MD, 45, 12, E),
    t("Hold bi-weekly progress reviews against agreed goals", "Performance Management", HI, 30, 4, M),
];

#[rustfmt::skip]
const MEDIUM_MEDIUM: &[ActionTemplate] = &[
    t("Set quarterly development goals with {name}", "Goal Setting", MD, 14, 2, M),
    t("Complete a skills-building course aligned to team needs", "Skill Development", MD, 60, 12, E),
    t("Take ownership of a cross-functional project", "Collaboration", MD, 90, 30, E),
    t("Hold a monthly career conversation with {name}", "Career Development", LO, 30, 2, M),
    t("Gather 360 feedback from peers and reflect on themes", "Self Awareness", LO, 45, 3, E),
];

#[rustfmt::skip]
const HIGH_MEDIUM: &[ActionTemplate] = &[
    t("Discuss {name}'s career aspirations and next-role options", "Career Development", HI, 14, 2, M),
    t("Assign a stretch assignment with broader scope", "Leadership", HI, 30, 20, M),
    t("Enroll {name} in a leadership fundamentals program", "Leadership", MD, 60, 16, H),
    t("Mentor a junior team member", "Coaching", MD, 45, 10, E),
    t("Review compensation and recognition for {name}", "Retention", MD, 30, 2, H),
];

#[rustfmt::skip]
const LOW_HIGH: &[ActionTemplate] = &[
    t("Identify blockers preventing {name} from performing at potential", "Performance Management", HI, 7, 2, M),
    t("Clarify role expectations and success criteria with {name}", "Goal Setting", HI, 14, 2, M),
    t("Assign a senior mentor to accelerate {name}'s ramp-up", "Mentorship", HI, 21, 8, M),
    t("Complete focused training on core role skills", "Skill Development", MD, 45, 12, E),
    t("Evaluate role fit and consider realignment to {name}'s strengths", "Career Development", MD, 60, 3, H),
];

#[rustfmt::skip]
const MEDIUM_HIGH: &[ActionTemplate] = &[
    t("Create an individual development plan targeting next-level readiness for {name}", "Career Development", HI, 14, 3, M),
    t("Assign a stretch project with visibility to senior leadership", "Leadership", HI, 45, 25, M),
    t("Enroll {name} in the emerging leaders program", "Leadership", MD, 60, 24, H),
    t("Pair {name} with an executive mentor", "Mentorship", MD, 30, 6, H),
    t("Close the delivery gap on current-role objectives", "Performance", HI, 30, 10, E),
];

#[rustfmt::skip]
const HIGH_HIGH: &[ActionTemplate] = &[
    t("Add {name} to the succession plan for a critical role", "Succession Planning", HI, 14, 2, H),
    t("Hold a retention conversation about {name}'s long-term goals", "Retention", HI, 7, 1, M),
    t("Assign an executive sponsor to {name}", "Leadership", HI, 30, 4, H),
    t("Lead a high-visibility strategic initiative", "Strategic Thinking", HI, 60, 40, E),
    t("Review compensation and long-term incentive eligibility", "Compensation", HI, 30, 2, H),
    t("Complete the advanced leadership program", "Leadership", MD, 90, 30, E),
];

/// `[performance][potential]`, each axis ordered low, medium, high.
const PLAYBOOK: [[&[ActionTemplate]; 3]; 3] = [
    [LOW_LOW, LOW_MEDIUM, LOW_HIGH],
    [MEDIUM_LOW, MEDIUM_MEDIUM, MEDIUM_HIGH],
    [HIGH_LOW, HIGH_MEDIUM, HIGH_HIGH],
];

pub fn templates_for(performance: Level, potential: Level) -> &'static [ActionTemplate] {
    PLAYBOOK
        .get(usize::from(performance.rank()) - 1)
        .and_then(|row| row.get(usize::from(potential.rank()) - 1))
        .copied()
        .unwrap_or(&[])
}

/// Builds a fresh, not-started action item due `days_to_complete` days from `now`.
/// Due dates are clamped to `1..=MAX_DAYS_TO_COMPLETE` days out.
pub fn stamp_action_item(
    description: String,
    skill_area: String,
    priority: Priority,
    days_to_complete: i64,
    estimated_hours: u32,
    owner: Owner,
    now: DateTime<Utc>,
) -> ActionItem {
    ActionItem {
        id: Uuid::new_v4(),
        description,
        skill_area,
        due_date: now + Duration::days(days_to_complete.clamp(1, MAX_DAYS_TO_COMPLETE)),
        owner,
        priority,
        estimated_hours,
        status: ActionItemStatus::NotStarted,
        completed: false,
        completed_date: None,
    }
}

impl ActionTemplate {
    pub fn instantiate(&self, employee_name: &str, now: DateTime<Utc>) -> ActionItem {
        stamp_action_item(
            self.description.replace("{name}", employee_name),
            self.skill_area.to_string(),
            self.priority,
            self.days_to_complete,
            self.estimated_hours,
            self.owner,
            now,
        )
    }
}

/// Generates the action items for a grid placement. Missing levels default to medium.
pub fn generate_action_items(
    performance: Option<Level>,
    potential: Option<Level>,
    employee_name: &str,
    now: DateTime<Utc>,
) -> Vec<ActionItem> {
    templates_for(performance.unwrap_or_default(), potential.unwrap_or_default())
        .iter()
        .map(|template| template.instantiate(employee_name, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 8, 30, 0).unwrap()
    }

    #[test]
    fn test_every_cell_yields_four_to_six_items() {
        for performance in Level::ALL {
            for potential in Level::ALL {
                let items =
                    generate_action_items(Some(performance), Some(potential), "Alex Kim", now());
                assert!(
                    (4..=6).contains(&items.len()),
                    "{performance}/{potential} produced {} items",
                    items.len()
                );
                let ids: HashSet<Uuid> = items.iter().map(|i| i.id).collect();
                assert_eq!(ids.len(), items.len());
                for item in &items {
                    assert!(item.due_date > now());
                    assert!(!item.completed);
                    assert_eq!(item.status, ActionItemStatus::NotStarted);
                    assert!(item.completed_date.is_none());
                }
            }
        }
    }

    #[test]
    fn test_missing_levels_default_to_medium_cell() {
        let defaulted = generate_action_items(None, None, "Alex Kim", now());
        let explicit = generate_action_items(Some(Level::Medium), Some(Level::Medium), "Alex Kim", now());
        let strip = |items: Vec<ActionItem>| {
            items
                .into_iter()
                .map(|i| (i.description, i.due_date, i.priority))
                .collect::<Vec<_>>()
        };
        assert_eq!(strip(defaulted), strip(explicit));
    }

    #[test]
    fn test_employee_name_is_substituted() {
        let items = generate_action_items(Some(Level::High), Some(Level::High), "Alex Kim", now());
        assert!(items[0].description.contains("Alex Kim"));
        assert!(items.iter().all(|i| !i.description.contains("{name}")));
    }

    #[test]
    fn test_due_date_offsets() {
        let items = generate_action_items(Some(Level::Low), Some(Level::Low), "Alex Kim", now());
        assert_eq!(items[0].due_date, now() + Duration::days(7));
        assert_eq!(items[4].owner, Owner::Hr);
    }

    #[test]
    fn test_corner_cells_encode_policy() {
        let star = templates_for(Level::High, Level::High);
        assert!(star.iter().any(|t| t.skill_area == "Succession Planning"));
        assert!(star.iter().any(|t| t.skill_area == "Retention"));

        let risk = templates_for(Level::Low, Level::Low);
        assert!(risk.iter().any(|t| t.description.starts_with("Document")));
        assert!(risk.iter().any(|t| t.description.contains("exit")));
    }

    #[test]
    fn test_stamp_never_due_in_the_past() {
        let item = stamp_action_item(
            "x".to_string(),
            "y".to_string(),
            Priority::Low,
            0,
            1,
            Owner::Employee,
            now(),
        );
        assert_eq!(item.due_date, now() + Duration::days(1));
    }
}
