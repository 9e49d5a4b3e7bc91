use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One race week of a season.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    pub schedule_id: i32,
    pub season_id: i32,
    pub week: i32,
    pub track: String,
    pub race_date: Option<chrono::NaiveDate>,
}
