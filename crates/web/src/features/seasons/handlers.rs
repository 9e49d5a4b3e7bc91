use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::season::{SeasonDetailResponse, SeasonResponse},
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons",
    responses(
        (status = 200, description = "List all seasons successfully", body = Vec<SeasonResponse>)
    ),
    tag = "seasons"
)]
pub async fn list_seasons(
    State(db): State<Database>,
) -> Result<Json<Vec<SeasonResponse>>, WebError> {
    let seasons = services::list_seasons(db.pool()).await?;

    let response: Vec<SeasonResponse> = seasons.into_iter().map(SeasonResponse::from).collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/seasons/{slug}",
    params(
        ("slug" = String, Path, description = "Season slug")
    ),
    responses(
        (status = 200, description = "Season with its race weeks", body = SeasonDetailResponse),
        (status = 404, description = "Season not found")
    ),
    tag = "seasons"
)]
pub async fn get_season(
    State(db): State<Database>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let season = services::get_season_detail(db.pool(), &slug).await?;

    Ok(Json(season).into_response())
}
