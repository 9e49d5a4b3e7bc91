use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A member's pick for one slot (schedule x division x split).
/// Resubmitting for the same slot replaces the row, never duplicates it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Prediction {
    pub prediction_id: i32,
    pub user_id: Uuid,
    pub schedule_id: i32,
    pub division: i16,
    pub split: String,
    pub driver_id: i32,
    pub updated_at: chrono::NaiveDateTime,
}
