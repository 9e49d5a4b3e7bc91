use sqlx::PgPool;
use storage::{
    dto::season::SeasonDetailResponse,
    error::Result,
    models::Season,
    repository::{schedule::ScheduleRepository, season::SeasonRepository},
};

/// List all seasons
pub async fn list_seasons(pool: &PgPool) -> Result<Vec<Season>> {
    let repo = SeasonRepository::new(pool);
    repo.list().await
}

/// Get a season with its race weeks
pub async fn get_season_detail(pool: &PgPool, slug: &str) -> Result<SeasonDetailResponse> {
    let season = SeasonRepository::new(pool).find_by_slug(slug).await?;
    let schedules = ScheduleRepository::new(pool)
        .list_by_season(season.season_id)
        .await?;

    Ok(SeasonDetailResponse::from_parts(season, schedules))
}
