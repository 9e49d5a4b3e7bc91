use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One driver's finishing position within a slot. `split_position` is a
/// dense 1..N ranking; uniqueness per slot is enforced by the schema.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RaceResult {
    pub result_id: i32,
    pub schedule_id: i32,
    pub division: i16,
    pub split: String,
    pub driver_id: i32,
    pub split_position: i32,
}
