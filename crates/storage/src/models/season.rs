use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Season {
    pub season_id: i32,
    pub name: String,
    pub slug: String,
    pub status: String,
    /// Last moment any prediction for this season may still be changed.
    pub prediction_deadline: DateTime<Utc>,
    /// Earlier cutoff that freezes week-1 predictions only.
    pub week_one_deadline: DateTime<Utc>,
    pub created_at: chrono::NaiveDateTime,
}
