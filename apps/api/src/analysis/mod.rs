//! Narrative analysis — turns free-text review narrative into a grid
//! placement plus a dated action plan.
//!
//! Two `NarrativeAnalyzer` implementations share one result shape:
//! `LlmNarrativeAnalyzer` (remote, fallible) and `KeywordNarrativeAnalyzer`
//! (local, deterministic). `NarrativeAnalysisPipeline` tries the first and
//! falls back to the second on any failure.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::LlmError;
use crate::models::employee::Level;
use crate::models::plan::{ActionItem, PlanType};

pub mod fallback;
pub mod handlers;
pub mod llm;
pub mod pipeline;
pub mod prompts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub employee_id: Uuid,
    pub employee_name: String,
    pub review_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Ai,
    Fallback,
}

/// Normalised analysis result, identical in shape for both paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrativeAnalysis {
    pub performance: Level,
    pub potential: Level,
    pub box_key: String,
    pub reasoning: String,
    /// 0-100.
    pub confidence: u8,
    pub strengths: Vec<String>,
    pub development_areas: Vec<String>,
    pub success_metrics: Vec<String>,
    pub plan_type: PlanType,
    pub plan_title: String,
    pub objectives: Vec<String>,
    pub timeline: String,
    pub action_items: Vec<ActionItem>,
    pub source: AnalysisSource,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("text-analysis service failed: {0}")]
    Service(#[from] LlmError),

    #[error("text-analysis reply failed validation: {0}")]
    Invalid(String),
}

#[async_trait]
pub trait NarrativeAnalyzer: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        now: DateTime<Utc>,
    ) -> Result<NarrativeAnalysis, AnalysisError>;
}
