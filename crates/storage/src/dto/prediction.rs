use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Prediction;

/// Request payload for submitting (or replacing) a pick for one slot.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitPredictionRequest {
    pub user_id: Uuid,

    pub schedule_id: i32,

    #[validate(range(min = 1, max = 6, message = "division must be between 1 and 6"))]
    pub division: i16,

    #[validate(custom(function = "validate_split"))]
    pub split: String,

    pub driver_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PredictionListQuery {
    /// Slug of the season to list picks for
    pub season: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PredictionResponse {
    pub prediction_id: i32,
    pub user_id: Uuid,
    pub schedule_id: i32,
    pub division: i16,
    pub split: String,
    pub driver_id: i32,
    pub updated_at: chrono::NaiveDateTime,
}

// Validation helper
fn validate_split(split: &str) -> Result<(), validator::ValidationError> {
    const VALID_SPLITS: &[&str] = &["gold", "silver"];

    if VALID_SPLITS.contains(&split) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_split"))
    }
}

impl From<Prediction> for PredictionResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction_id: prediction.prediction_id,
            user_id: prediction.user_id,
            schedule_id: prediction.schedule_id,
            division: prediction.division,
            split: prediction.split,
            driver_id: prediction.driver_id,
            updated_at: prediction.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(division: i16, split: &str) -> SubmitPredictionRequest {
        SubmitPredictionRequest {
            user_id: Uuid::nil(),
            schedule_id: 1,
            division,
            split: split.to_string(),
            driver_id: 1,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request(1, "gold").validate().is_ok());
        assert!(request(6, "silver").validate().is_ok());
    }

    #[test]
    fn test_division_out_of_range_fails() {
        assert!(request(0, "gold").validate().is_err());
        assert!(request(7, "gold").validate().is_err());
    }

    #[test]
    fn test_unknown_split_fails() {
        assert!(request(1, "bronze").validate().is_err());
        assert!(request(1, "Gold").validate().is_err());
    }
}
