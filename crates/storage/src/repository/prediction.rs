use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::prediction::SubmitPredictionRequest;
use crate::error::{Result, StorageError};
use crate::models::Prediction;

/// Repository for Prediction database operations
pub struct PredictionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PredictionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every prediction in a season, across all members
    pub async fn list_by_season(&self, season_id: i32) -> Result<Vec<Prediction>> {
        let predictions = sqlx::query_as::<_, Prediction>(
            r#"
            SELECT p.prediction_id, p.user_id, p.schedule_id, p.division,
                   p.split, p.driver_id, p.updated_at
            FROM predictions p
            INNER JOIN schedules s ON s.schedule_id = p.schedule_id
            WHERE s.season_id = $1
            "#,
        )
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(predictions)
    }

    /// One member's predictions for a season, in week/slot order
    pub async fn list_for_user(&self, user_id: Uuid, season_id: i32) -> Result<Vec<Prediction>> {
        let predictions = sqlx::query_as::<_, Prediction>(
            r#"
            SELECT p.prediction_id, p.user_id, p.schedule_id, p.division,
                   p.split, p.driver_id, p.updated_at
            FROM predictions p
            INNER JOIN schedules s ON s.schedule_id = p.schedule_id
            WHERE p.user_id = $1 AND s.season_id = $2
            ORDER BY s.week, p.division, p.split
            "#,
        )
        .bind(user_id)
        .bind(season_id)
        .fetch_all(self.pool)
        .await?;

        Ok(predictions)
    }

    /// Insert or replace the member's pick for the slot. The unique key on
    /// (user, schedule, division, split) makes a resubmission an update.
    pub async fn upsert(&self, req: &SubmitPredictionRequest) -> Result<Prediction> {
        let prediction = sqlx::query_as::<_, Prediction>(
            r#"
            INSERT INTO predictions (user_id, schedule_id, division, split, driver_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id, schedule_id, division, split)
            DO UPDATE SET driver_id = EXCLUDED.driver_id, updated_at = now()
            RETURNING prediction_id, user_id, schedule_id, division, split,
                      driver_id, updated_at
            "#,
        )
        .bind(req.user_id)
        .bind(req.schedule_id)
        .bind(req.division)
        .bind(&req.split)
        .bind(req.driver_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_foreign_key_violation() {
                StorageError::ConstraintViolation(
                    "Unknown member, schedule or driver reference".to_string(),
                )
            } else {
                e
            }
        })?;

        Ok(prediction)
    }
}
