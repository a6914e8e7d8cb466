//! Retention actions composed from flight-risk factor reasons.
//!
//! Output order is fixed: stay interview baseline, then one bundle per matched
//! category (career, tenure, top talent, plan gap), then senior-leader
//! escalation for high risk, then the two universal closing items.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::assessment::flight_risk::{RiskAssessment, RiskLevel};
use crate::models::employee::Employee;
use crate::models::plan::{
    EmployeePlan, Owner, PlanStatus, PlanType, Priority, RetentionPlanData,
};
use crate::planning::policy::{default_plan_title, default_success_metrics, default_timeline};
use crate::planning::templates::{t, ActionTemplate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionCategory {
    CareerGrowth,
    Tenure,
    TopTalent,
    PlanGap,
}

impl RetentionCategory {
    /// Matching order, which is also output order.
    pub const ORDER: [RetentionCategory; 4] = [
        RetentionCategory::CareerGrowth,
        RetentionCategory::Tenure,
        RetentionCategory::TopTalent,
        RetentionCategory::PlanGap,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            RetentionCategory::CareerGrowth => {
                &["career", "growth", "promotion", "advancement", "untapped"]
            }
            // Early tenure only.
            RetentionCategory::Tenure => &["new hire", "early tenure", "short tenure", "onboarding"],
            RetentionCategory::TopTalent => &[
                "top performer",
                "top talent",
                "high performer",
                "high potential",
            ],
            RetentionCategory::PlanGap => &["plan", "development"],
        }
    }

    fn bundle(self) -> &'static [ActionTemplate] {
        match self {
            RetentionCategory::CareerGrowth => CAREER_BUNDLE,
            RetentionCategory::Tenure => TENURE_BUNDLE,
            RetentionCategory::TopTalent => TOP_TALENT_BUNDLE,
            RetentionCategory::PlanGap => PLAN_GAP_BUNDLE,
        }
    }

    fn matches(self, lowered_factors: &[String]) -> bool {
        lowered_factors
            .iter()
            .any(|f| self.keywords().iter().any(|kw| f.contains(kw)))
    }
}

pub const STAY_INTERVIEW: ActionTemplate = t(
    "Conduct a stay interview with {name} to understand motivations and concerns",
    "Engagement",
    Priority::Medium,
    7,
    1,
    Owner::Manager,
);

pub const LTIP_DISCUSSION: &str = "Discuss LTIP eligibility and long-term incentives";

#[rustfmt::skip]
const CAREER_BUNDLE: &[ActionTemplate] = &[
    t("Map a career path for {name} with concrete next-role milestones", "Career Development", Priority::Medium, 30, 4, Owner::Manager),
    t("Discuss promotion criteria and a realistic timeline", "Career Development", Priority::Medium, 21, 2, Owner::Manager),
    t("Identify a stretch assignment aligned with {name}'s career goals", "Career Development", Priority::Medium, 45, 10, Owner::Manager),
];

#[rustfmt::skip]
const TENURE_BUNDLE: &[ActionTemplate] = &[
    t("Schedule an onboarding check-in to surface early concerns", "Engagement", Priority::High, 7, 1, Owner::Manager),
    t("Assign an onboarding buddy to {name}", "Integration", Priority::Medium, 7, 2, Owner::Manager),
    t("Review first-year goals and expectations with {name}", "Goal Setting", Priority::Medium, 30, 2, Owner::Manager),
];

#[rustfmt::skip]
const TOP_TALENT_BUNDLE: &[ActionTemplate] = &[
    t("Conduct a compensation review against market rates", "Compensation", Priority::High, 30, 2, Owner::Hr),
    t(LTIP_DISCUSSION, "Compensation", Priority::High, 30, 2, Owner::Hr),
    t("Create visibility opportunities with senior leadership for {name}", "Visibility", Priority::Medium, 45, 6, Owner::Manager),
];

#[rustfmt::skip]
const PLAN_GAP_BUNDLE: &[ActionTemplate] = &[
    t("Create a development plan for {name} with clear objectives", "Development", Priority::High, 14, 3, Owner::Manager),
    t("Agree quarterly development goals and check-in cadence", "Goal Setting", Priority::Medium, 30, 2, Owner::Manager),
];

const SENIOR_LEADER_ESCALATION: ActionTemplate = t(
    "Engage a senior leader in a retention conversation with {name}",
    "Leadership",
    Priority::High,
    7,
    2,
    Owner::Manager,
);

#[rustfmt::skip]
const UNIVERSAL_CLOSING: &[ActionTemplate] = &[
    t("Check in on workload and work-life balance", "Wellbeing", Priority::Medium, 14, 1, Owner::Manager),
    t("Publicly recognise {name}'s recent contributions", "Recognition", Priority::Low, 14, 1, Owner::Manager),
];

/// Composes retention action templates from factor reasons (matched
/// case-insensitively) and the overall risk level.
pub fn generate_retention_actions(factors: &[String], risk_level: RiskLevel) -> Vec<ActionTemplate> {
    let lowered: Vec<String> = factors.iter().map(|f| f.to_lowercase()).collect();
    let mut actions = Vec::new();

    let mut baseline = STAY_INTERVIEW;
    if risk_level == RiskLevel::High {
        baseline.priority = Priority::High;
    }
    actions.push(baseline);

    for category in RetentionCategory::ORDER {
        if category.matches(&lowered) {
            actions.extend_from_slice(category.bundle());
        }
    }

    if risk_level == RiskLevel::High {
        actions.push(SENIOR_LEADER_ESCALATION);
    }

    actions.extend_from_slice(UNIVERSAL_CLOSING);
    actions
}

/// Proposes a retention plan for `employee` from its current risk view and
/// the caller's retention notes.
pub fn build_retention_plan(
    employee: &Employee,
    risk: &RiskAssessment,
    data: RetentionPlanData,
    now: DateTime<Utc>,
) -> EmployeePlan {
    let action_items = generate_retention_actions(&risk.reasons(), risk.risk_level)
        .into_iter()
        .filter(|a| !(a.description == LTIP_DISCUSSION && data.ltip_eligible == Some(false)))
        .map(|a| a.instantiate(&employee.name, now))
        .collect();

    let mut objectives = vec![format!(
        "Reduce flight risk from {} (score {})",
        risk.risk_level.as_str(),
        risk.risk_score
    )];
    if let Some(concerns) = data.concerns.as_deref().filter(|c| !c.trim().is_empty()) {
        objectives.push(format!("Address stated concerns: {}", concerns.trim()));
    }
    if let Some(aspirations) = data
        .career_aspirations
        .as_deref()
        .filter(|a| !a.trim().is_empty())
    {
        objectives.push(format!("Support career aspirations: {}", aspirations.trim()));
    }

    let review_in = match risk.risk_level {
        RiskLevel::High => Duration::days(14),
        RiskLevel::Medium => Duration::days(30),
        RiskLevel::Low => Duration::days(60),
    };

    EmployeePlan {
        id: Uuid::new_v4(),
        employee_id: employee.id,
        plan_type: PlanType::Retention,
        title: default_plan_title(PlanType::Retention, &employee.name),
        objectives,
        action_items,
        success_metrics: default_success_metrics(PlanType::Retention),
        status: PlanStatus::Active,
        progress_percentage: 0,
        timeline: default_timeline(PlanType::Retention).to_string(),
        next_review_date: Some(now + review_in),
        retention: Some(data),
    }
}
