use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::prediction::SubmitPredictionRequest, error::Result, models::Prediction,
    repository::season::SeasonRepository, services::predictions,
};
use uuid::Uuid;

/// Store a pick, dated against the server clock. The scoring engine itself
/// never reads the clock; the submission window check is the one place time
/// enters.
pub async fn submit_prediction(pool: &PgPool, req: &SubmitPredictionRequest) -> Result<Prediction> {
    predictions::submit_prediction(pool, req, Utc::now()).await
}

/// A member's picks for the season named by slug
pub async fn list_member_predictions(
    pool: &PgPool,
    user_id: Uuid,
    season_slug: &str,
) -> Result<Vec<Prediction>> {
    let season = SeasonRepository::new(pool).find_by_slug(season_slug).await?;

    predictions::list_user_predictions(pool, user_id, season.season_id).await
}
