use sqlx::PgPool;
use storage::{
    dto::history::UserHistoryResponse, error::Result, repository::season::SeasonRepository,
    services::history,
};
use uuid::Uuid;

/// One member's scored season history
pub async fn get_member_history(
    pool: &PgPool,
    slug: &str,
    user_id: Uuid,
) -> Result<UserHistoryResponse> {
    let season = SeasonRepository::new(pool).find_by_slug(slug).await?;

    history::compute_user_history(pool, user_id, season.season_id).await
}
