//! AI-backed narrative analyzer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::analysis::prompts::{build_narrative_prompt, NARRATIVE_SYSTEM};
use crate::analysis::{
    AnalysisError, AnalysisRequest, AnalysisSource, NarrativeAnalysis, NarrativeAnalyzer,
};
use crate::assessment::grid::to_box_key;
use crate::llm_client::LlmClient;
use crate::models::employee::Level;
use crate::models::plan::{ActionItem, Owner, Priority};
use crate::planning::policy::{
    default_plan_title, default_success_metrics, default_timeline, plan_type_for,
};
use crate::planning::templates::stamp_action_item;

const DEFAULT_DAYS_TO_COMPLETE: i64 = 30;
const DEFAULT_ESTIMATED_HOURS: u32 = 4;

/// Reply shape requested by `NARRATIVE_PROMPT_TEMPLATE`. Levels stay strings
/// and `actionItems` stays untyped so validation can say what was wrong.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalysis {
    performance: String,
    potential: String,
    #[serde(default)]
    reasoning: String,
    confidence: f64,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    development_areas: Vec<String>,
    #[serde(default)]
    plan_title: Option<String>,
    #[serde(default)]
    objectives: Vec<String>,
    action_items: Value,
    #[serde(default)]
    success_metrics: Vec<String>,
    #[serde(default)]
    timeline: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActionItem {
    description: String,
    #[serde(default)]
    skill_area: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    days_to_complete: Option<i64>,
    #[serde(default)]
    estimated_hours: Option<u32>,
    #[serde(default)]
    owner: Option<String>,
}

pub struct LlmNarrativeAnalyzer(pub LlmClient);

#[async_trait]
impl NarrativeAnalyzer for LlmNarrativeAnalyzer {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<NarrativeAnalysis, AnalysisError> {
        let prompt = build_narrative_prompt(&request.employee_name, &request.review_text);
        let raw: Value = self.0.call_json(&prompt, NARRATIVE_SYSTEM).await?;
        let analysis = normalize_reply(raw, &request.employee_name, now)?;
        info!(
            "LLM placed {} at {} (confidence {})",
            request.employee_id, analysis.box_key, analysis.confidence
        );
        Ok(analysis)
    }
}

/// Validates a reply object and stamps its action items with ids and due dates.
pub fn normalize_reply(
    reply: Value,
    employee_name: &str,
    now: DateTime<Utc>,
) -> Result<NarrativeAnalysis, AnalysisError> {
    let raw: RawAnalysis = serde_json::from_value(reply)
        .map_err(|e| AnalysisError::Invalid(format!("reply does not match schema: {e}")))?;

    let performance: Level = raw
        .performance
        .parse()
        .map_err(|e| AnalysisError::Invalid(format!("performance: {e}")))?;
    let potential: Level = raw
        .potential
        .parse()
        .map_err(|e| AnalysisError::Invalid(format!("potential: {e}")))?;

    if !raw.confidence.is_finite() {
        return Err(AnalysisError::Invalid("confidence is not a number".to_string()));
    }
    let confidence = raw.confidence.round().clamp(0.0, 100.0) as u8;

    let Value::Array(items) = raw.action_items else {
        return Err(AnalysisError::Invalid("actionItems is not a list".to_string()));
    };
    let action_items = items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<RawActionItem>(item)
                .map(|raw| stamp_raw_item(raw, now))
                .map_err(|e| AnalysisError::Invalid(format!("action item: {e}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let plan_type = plan_type_for(Some(performance));
    let plan_title = raw
        .plan_title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| default_plan_title(plan_type, employee_name));
    let timeline = raw
        .timeline
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| default_timeline(plan_type).to_string());
    let success_metrics = if raw.success_metrics.is_empty() {
        default_success_metrics(plan_type)
    } else {
        raw.success_metrics
    };

    Ok(NarrativeAnalysis {
        performance,
        potential,
        box_key: to_box_key(performance, potential),
        reasoning: raw.reasoning,
        confidence,
        strengths: raw.strengths,
        development_areas: raw.development_areas,
        success_metrics,
        plan_type,
        plan_title,
        objectives: raw.objectives,
        timeline,
        action_items,
        source: AnalysisSource::Ai,
    })
}

fn stamp_raw_item(raw: RawActionItem, now: DateTime<Utc>) -> ActionItem {
    let priority = match raw.priority.as_deref().map(str::to_lowercase).as_deref() {
        Some("high") => Priority::High,
        Some("low") => Priority::Low,
        _ => Priority::Medium,
    };
    let owner = match raw.owner.as_deref().map(str::to_lowercase).as_deref() {
        Some("manager") => Owner::Manager,
        Some("hr") => Owner::Hr,
        _ => Owner::Employee,
    };
    stamp_action_item(
        raw.description,
        raw.skill_area.unwrap_or_else(|| "General".to_string()),
        priority,
        raw.days_to_complete.unwrap_or(DEFAULT_DAYS_TO_COMPLETE),
        raw.estimated_hours.unwrap_or(DEFAULT_ESTIMATED_HOURS),
        owner,
        now,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::plan::{ActionItemStatus, PlanType};
    use crate::planning::templates::MAX_DAYS_TO_COMPLETE;
    use chrono::{Duration, TimeZone};
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 3, 9, 0, 0).unwrap()
    }

    fn reply() -> Value {
        json!({
            "performance": "high",
            "potential": "Medium",
            "reasoning": "Delivered every quarterly goal.",
            "confidence": 87.4,
            "strengths": ["Delivery"],
            "developmentAreas": ["Delegation"],
            "planTitle": "Growth plan",
            "objectives": ["Lead a project"],
            "actionItems": [
                {
                    "description": "Lead the Q3 migration",
                    "skillArea": "Leadership",
                    "priority": "HIGH",
                    "daysToComplete": 45,
                    "estimatedHours": 30,
                    "owner": "Employee"
                },
                { "description": "Pick a mentor", "owner": "hr" }
            ],
            "successMetrics": ["Migration shipped"],
            "timeline": "90 days"
        })
    }

    #[test]
    fn test_valid_reply_is_normalized() {
        let analysis = normalize_reply(reply(), "Tom Reed", now()).unwrap();
        assert_eq!(analysis.performance, Level::High);
        assert_eq!(analysis.potential, Level::Medium);
        assert_eq!(analysis.box_key, "3-2");
        assert_eq!(analysis.confidence, 87);
        assert_eq!(analysis.source, AnalysisSource::Ai);
        assert_eq!(analysis.plan_type, PlanType::Development);
        assert_eq!(analysis.timeline, "90 days");

        let first = &analysis.action_items[0];
        assert_eq!(first.priority, Priority::High);
        assert_eq!(first.due_date, now() + Duration::days(45));
        assert_eq!(first.status, ActionItemStatus::NotStarted);

        let second = &analysis.action_items[1];
        assert_eq!(second.owner, Owner::Hr);
        assert_eq!(second.priority, Priority::Medium);
        assert_eq!(second.due_date, now() + Duration::days(DEFAULT_DAYS_TO_COMPLETE));
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_out_of_range_level_is_rejected() {
        let mut bad = reply();
        bad["performance"] = json!("exceptional");
        assert!(matches!(
            normalize_reply(bad, "Tom Reed", now()),
            Err(AnalysisError::Invalid(_))
        ));
    }

    #[test]
    fn test_action_items_must_be_a_list() {
        let mut bad = reply();
        bad["actionItems"] = json!({"description": "not a list"});
        assert!(matches!(
            normalize_reply(bad, "Tom Reed", now()),
            Err(AnalysisError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        let bad = json!({"performance": "high", "potential": "high"});
        assert!(normalize_reply(bad, "Tom Reed", now()).is_err());
    }

    #[test]
    fn test_low_performance_gets_pip_and_defaults() {
        let mut r = reply();
        r["performance"] = json!("low");
        r["planTitle"] = json!("  ");
        r["successMetrics"] = json!([]);
        let analysis = normalize_reply(r, "Tom Reed", now()).unwrap();
        assert_eq!(analysis.plan_type, PlanType::PerformanceImprovement);
        assert_eq!(analysis.plan_title, "Performance Improvement Plan for Tom Reed");
        assert!(!analysis.success_metrics.is_empty());
    }

    #[test]
    fn test_confidence_is_clamped() {
        let mut r = reply();
        r["confidence"] = json!(140);
        assert_eq!(normalize_reply(r, "Tom Reed", now()).unwrap().confidence, 100);
    }

    #[test]
    fn test_extreme_days_to_complete_are_clamped() {
        let mut r = reply();
        r["actionItems"] = json!([
            { "description": "Far future", "daysToComplete": 100_000_000_i64 },
            { "description": "Int max", "daysToComplete": i64::MAX },
            { "description": "Backdated", "daysToComplete": -40 }
        ]);
        let analysis = normalize_reply(r, "Tom Reed", now()).unwrap();
        let due: Vec<_> = analysis.action_items.iter().map(|i| i.due_date).collect();
        assert_eq!(due[0], now() + Duration::days(MAX_DAYS_TO_COMPLETE));
        assert_eq!(due[1], now() + Duration::days(MAX_DAYS_TO_COMPLETE));
        assert_eq!(due[2], now() + Duration::days(1));
    }
}
