use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::scoring::Split;

/// A member's scored season, one row per contested slot plus week rollups.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserHistoryResponse {
    pub user_id: Uuid,
    pub display_name: String,
    pub predictions: Vec<PredictionOutcome>,
    pub weekly_scores: Vec<WeeklyScore>,
    pub total_score: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PredictionOutcome {
    pub week: i32,
    pub track: String,
    pub division: i16,
    pub split: Split,
    /// Name of the predicted driver; None when no pick was made for the slot.
    pub predicted_driver: Option<String>,
    pub points: i32,
    pub outcome: OutcomeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// The predicted driver finished; points are their position.
    Scored,
    /// Penalty points: the pick did not finish, or no pick was made.
    Penalized,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeeklyScore {
    pub week: i32,
    pub points: i32,
}
