use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    Manager,
    #[serde(rename = "self")]
    SelfReview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    NotStarted,
    Draft,
    Submitted,
    Completed,
    Shared,
}

impl ReviewStatus {
    /// Statuses that count as finished for the given review type. Manager
    /// reviews are finished once completed or shared with the employee; a self
    /// review is finished as soon as the employee submits it.
    pub fn is_complete_for(self, review_type: ReviewType) -> bool {
        match review_type {
            ReviewType::Manager => matches!(self, ReviewStatus::Completed | ReviewStatus::Shared),
            ReviewType::SelfReview => {
                matches!(self, ReviewStatus::Submitted | ReviewStatus::Completed)
            }
        }
    }
}

/// Manager's categorical summary rating on a five-point scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerRating {
    Excellence,
    ExceedsExpectations,
    MeetsExpectations,
    NeedsImprovement,
    NotPerforming,
}

impl ManagerRating {
    pub fn score(self) -> u8 {
        match self {
            ManagerRating::Excellence => 5,
            ManagerRating::ExceedsExpectations => 4,
            ManagerRating::MeetsExpectations => 3,
            ManagerRating::NeedsImprovement => 2,
            ManagerRating::NotPerforming => 1,
        }
    }
}

/// The three numeric sub-scores of a self review, each nominally 1-5.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelfScores {
    pub goals: Option<f64>,
    pub competencies: Option<f64>,
    pub values: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReview {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub review_type: ReviewType,
    pub status: ReviewStatus,
    /// Set on manager reviews only.
    #[serde(default)]
    pub summary_rating: Option<ManagerRating>,
    /// Set on self reviews only.
    #[serde(default)]
    pub self_scores: Option<SelfScores>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_rating_scale() {
        assert_eq!(ManagerRating::Excellence.score(), 5);
        assert_eq!(ManagerRating::MeetsExpectations.score(), 3);
        assert_eq!(ManagerRating::NotPerforming.score(), 1);
    }

    #[test]
    fn test_completed_sets_differ_by_type() {
        assert!(ReviewStatus::Shared.is_complete_for(ReviewType::Manager));
        assert!(!ReviewStatus::Submitted.is_complete_for(ReviewType::Manager));
        assert!(ReviewStatus::Submitted.is_complete_for(ReviewType::SelfReview));
        assert!(!ReviewStatus::Draft.is_complete_for(ReviewType::SelfReview));
    }

    #[test]
    fn test_review_type_serde_names() {
        let t: ReviewType = serde_json::from_str(r#""self""#).unwrap();
        assert_eq!(t, ReviewType::SelfReview);
        assert_eq!(
            serde_json::to_string(&ReviewType::Manager).unwrap(),
            r#""manager""#
        );
    }
}
