//! Manager vs. self review alignment.
//!
//! Both reviews are normalised onto the same 1-5 integer scale before
//! comparison. Misalignment is only ever reported on two complete reviews.

use serde::{Deserialize, Serialize};

use crate::models::review::{PerformanceReview, ReviewType, SelfScores};

const MISALIGNMENT_GAP: u8 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewAlignment {
    pub manager_score: Option<u8>,
    pub self_score: Option<u8>,
    pub manager_pending: bool,
    pub self_pending: bool,
    pub misaligned: bool,
}

pub fn normalize_manager(review: &PerformanceReview) -> Option<u8> {
    review.summary_rating.map(|r| r.score())
}

/// Mean of the present sub-scores, rounded and clamped to 1-5.
pub fn normalize_self(scores: &SelfScores) -> Option<u8> {
    let present: Vec<f64> = [scores.goals, scores.competencies, scores.values]
        .into_iter()
        .flatten()
        .filter(|s| s.is_finite())
        .collect();
    if present.is_empty() {
        return None;
    }
    let mean = present.iter().sum::<f64>() / present.len() as f64;
    Some(mean.round().clamp(1.0, 5.0) as u8)
}

fn find(reviews: &[PerformanceReview], review_type: ReviewType) -> Option<&PerformanceReview> {
    reviews.iter().find(|r| r.review_type == review_type)
}

fn is_complete(review: Option<&PerformanceReview>, review_type: ReviewType) -> bool {
    review.is_some_and(|r| r.status.is_complete_for(review_type))
}

/// Analyses one employee's reviews. Reviews belonging to other employees
/// must already be filtered out by the caller.
pub fn analyze_alignment(reviews: &[PerformanceReview]) -> ReviewAlignment {
    let manager = find(reviews, ReviewType::Manager);
    let self_review = find(reviews, ReviewType::SelfReview);

    let manager_complete = is_complete(manager, ReviewType::Manager);
    let self_complete = is_complete(self_review, ReviewType::SelfReview);

    let manager_score = manager.and_then(normalize_manager);
    let self_score = self_review
        .and_then(|r| r.self_scores.as_ref())
        .and_then(normalize_self);

    let misaligned = match (manager_complete && self_complete, manager_score, self_score) {
        (true, Some(m), Some(s)) => m.abs_diff(s) >= MISALIGNMENT_GAP,
        _ => false,
    };

    ReviewAlignment {
        manager_score,
        self_score,
        manager_pending: !manager_complete,
        self_pending: !self_complete,
        misaligned,
    }
}
