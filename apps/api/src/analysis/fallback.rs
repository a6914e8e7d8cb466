//! Keyword fallback classifier.
//!
//! Counts whole-word occurrences of fixed indicator phrases in the
//! lower-cased text, so "late" never matches "latest".
//! For each axis: high when high > low and high ≥ 2, low when low > high,
//! medium otherwise. Confidence is always `FALLBACK_CONFIDENCE`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analysis::{
    AnalysisError, AnalysisRequest, AnalysisSource, NarrativeAnalysis, NarrativeAnalyzer,
};
use crate::assessment::grid::{cell_label, to_box_key};
use crate::models::employee::Level;
use crate::planning::policy::{
    default_plan_title, default_success_metrics, default_timeline, plan_type_for,
};
use crate::planning::templates::{generate_action_items, templates_for};

pub const FALLBACK_CONFIDENCE: u8 = 60;
const MIN_HIGH_HITS: usize = 2;

const PERFORMANCE_HIGH: &[&str] = &[
    "excellent",
    "outstanding",
    "exceptional",
    "exceeds",
    "exceeded",
    "consistently delivers",
    "high quality",
    "reliable",
    "top performer",
    "strong results",
    "impressive",
];

const PERFORMANCE_LOW: &[&str] = &[
    "struggles",
    "struggled",
    "below expectations",
    "missed",
    "poor",
    "needs improvement",
    "late",
    "inconsistent",
    "underperform",
    "underperforms",
    "underperformed",
    "underperforming",
    "mistakes",
    "errors",
];

const POTENTIAL_HIGH: &[&str] = &[
    "leadership",
    "takes initiative",
    "shows initiative",
    "learns quickly",
    "quick learner",
    "ambitious",
    "strategic",
    "mentors",
    "growth mindset",
    "eager",
    "proactive",
];

const POTENTIAL_LOW: &[&str] = &[
    "resistant",
    "plateau",
    "lacks initiative",
    "not interested",
    "reluctant",
    "limited growth",
    "avoids",
    "complacent",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisCounts {
    pub high: usize,
    pub low: usize,
}

/// Splits lower-cased text into alphanumeric words.
fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Occurrences of a single- or multi-word phrase as consecutive tokens.
fn occurrences(tokens: &[&str], phrase: &str) -> usize {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return 0;
    }
    tokens
        .windows(words.len())
        .filter(|window| *window == &words[..])
        .count()
}

impl AxisCounts {
    fn tally(tokens: &[&str], high: &[&str], low: &[&str]) -> Self {
        let count = |phrases: &[&str]| -> usize {
            phrases.iter().map(|p| occurrences(tokens, p)).sum()
        };
        Self {
            high: count(high),
            low: count(low),
        }
    }

    pub fn level(self) -> Level {
        if self.high > self.low && self.high >= MIN_HIGH_HITS {
            Level::High
        } else if self.low > self.high {
            Level::Low
        } else {
            Level::Medium
        }
    }
}

/// Per-axis indicator counts for a narrative.
pub fn classify(review_text: &str) -> (AxisCounts, AxisCounts) {
    let text = review_text.to_lowercase();
    let tokens = tokenize(&text);
    (
        AxisCounts::tally(&tokens, PERFORMANCE_HIGH, PERFORMANCE_LOW),
        AxisCounts::tally(&tokens, POTENTIAL_HIGH, POTENTIAL_LOW),
    )
}

fn matched(tokens: &[&str], phrases: &[&[&str]]) -> Vec<String> {
    phrases
        .iter()
        .flat_map(|list| list.iter())
        .filter(|p| occurrences(tokens, p) > 0)
        .map(|w| w.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordNarrativeAnalyzer;

impl KeywordNarrativeAnalyzer {
    /// Infallible analysis; the pipeline calls this directly on fallback.
    pub fn analyze_offline(&self, request: &AnalysisRequest, now: DateTime<Utc>) -> NarrativeAnalysis {
        let (perf_counts, pot_counts) = classify(&request.review_text);
        let performance = perf_counts.level();
        let potential = pot_counts.level();

        let lowered = request.review_text.to_lowercase();
        let tokens = tokenize(&lowered);
        let strengths = matched(&tokens, &[PERFORMANCE_HIGH, POTENTIAL_HIGH]);
        let development_areas = matched(&tokens, &[PERFORMANCE_LOW, POTENTIAL_LOW]);

        let plan_type = plan_type_for(Some(performance));
        let mut objectives: Vec<String> = Vec::new();
        for template in templates_for(performance, potential) {
            let objective = format!("Build capability in {}", template.skill_area);
            if !objectives.contains(&objective) {
                objectives.push(objective);
            }
        }

        let reasoning = format!(
            "Keyword analysis placed {} in the {} box ({}): {} positive and {} negative \
             performance indicators, {} positive and {} negative potential indicators.",
            request.employee_name,
            cell_label(performance, potential),
            to_box_key(performance, potential),
            perf_counts.high,
            perf_counts.low,
            pot_counts.high,
            pot_counts.low,
        );

        NarrativeAnalysis {
            performance,
            potential,
            box_key: to_box_key(performance, potential),
            reasoning,
            confidence: FALLBACK_CONFIDENCE,
            strengths,
            development_areas,
            success_metrics: default_success_metrics(plan_type),
            plan_type,
            plan_title: default_plan_title(plan_type, &request.employee_name),
            objectives,
            timeline: default_timeline(plan_type).to_string(),
            action_items: generate_action_items(
                Some(performance),
                Some(potential),
                &request.employee_name,
                now,
            ),
            source: AnalysisSource::Fallback,
        }
    }
}

#[async_trait]
impl NarrativeAnalyzer for KeywordNarrativeAnalyzer {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<NarrativeAnalysis, AnalysisError> {
        Ok(self.analyze_offline(request, now))
    }
}
