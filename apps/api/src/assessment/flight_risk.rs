//! Flight risk — weighted-factor attrition score.
//!
//! Score is the plain sum of factor values:
//! - tenure: <6 months 20, <12 months 15, >48 months 10
//! - performance/potential: see `placement_factors`
//! - no active plan while assessed: 20
//!
//! Level: ≥50 high, ≥30 medium, otherwise low.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::employee::{Employee, Level};

const HIGH_RISK_THRESHOLD: u32 = 50;
const MEDIUM_RISK_THRESHOLD: u32 = 30;
const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    Tenure,
    Performance,
    Potential,
    NoPlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub risk: u32,
    pub reason: String,
}

/// A recomputed view; never stored as the source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: BTreeMap<RiskFactorKind, RiskFactor>,
}

impl RiskAssessment {
    /// Factor reasons in key order, the input `retention::generate_retention_actions` expects.
    pub fn reasons(&self) -> Vec<String> {
        self.factors.values().map(|f| f.reason.clone()).collect()
    }
}

pub fn score_flight_risk(employee: &Employee, has_plan: bool, now: DateTime<Utc>) -> RiskAssessment {
    let mut factors = BTreeMap::new();

    let months = (now - employee.joined_at).num_days() as f64 / DAYS_PER_MONTH;
    if let Some(factor) = tenure_factor(months) {
        factors.insert(RiskFactorKind::Tenure, factor);
    }

    match &employee.assessment {
        Some(assessment) => {
            let (performance, potential) =
                placement_factors(assessment.performance, assessment.potential);
            factors.insert(RiskFactorKind::Performance, performance);
            if let Some(potential) = potential {
                factors.insert(RiskFactorKind::Potential, potential);
            }
            if !has_plan {
                factors.insert(
                    RiskFactorKind::NoPlan,
                    RiskFactor {
                        risk: 20,
                        reason: "No development plan in place".to_string(),
                    },
                );
            }
        }
        None => {
            factors.insert(
                RiskFactorKind::Performance,
                RiskFactor {
                    risk: 10,
                    reason: "Not yet assessed".to_string(),
                },
            );
        }
    }

    let risk_score = factors.values().map(|f| f.risk).sum();

    RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        factors,
    }
}

fn tenure_factor(months: f64) -> Option<RiskFactor> {
    let (risk, reason) = if months < 6.0 {
        (20, "New hire: under 6 months tenure")
    } else if months < 12.0 {
        (15, "Early tenure: under 12 months")
    } else if months > 48.0 {
        (10, "Long tenure: over 4 years in role")
    } else {
        return None;
    };
    Some(RiskFactor {
        risk,
        reason: reason.to_string(),
    })
}

/// Performance factor plus the optional potential factor for an assessed employee.
fn placement_factors(performance: Level, potential: Level) -> (RiskFactor, Option<RiskFactor>) {
    let factor = |risk: u32, reason: &str| RiskFactor {
        risk,
        reason: reason.to_string(),
    };

    let perf = match (performance, potential) {
        (Level::High, Level::High) => factor(30, "Top performer, highly sought after externally"),
        (Level::High, _) => factor(20, "High performer attractive to competitors"),
        (Level::Low, _) => factor(15, "Low performance may signal disengagement"),
        _ => factor(5, "Moderate performance"),
    };

    let pot = match (performance, potential) {
        (Level::High, Level::High) => Some(factor(
            10,
            "High potential expecting visible career growth",
        )),
        (_, Level::High) => Some(factor(15, "Untapped potential: career growth not yet realised")),
        _ => None,
    };

    (perf, pot)
}
