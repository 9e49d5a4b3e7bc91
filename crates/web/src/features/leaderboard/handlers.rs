use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::PaginatedResponse,
        leaderboard::{LeaderboardEntry, LeaderboardQuery},
    },
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{slug}/leaderboard",
    params(
        ("slug" = String, Path, description = "Season slug"),
        LeaderboardQuery
    ),
    responses(
        (status = 200, description = "Season leaderboard with rank movement", body = PaginatedResponse<LeaderboardEntry>),
        (status = 400, description = "Invalid query parameters"),
        (status = 404, description = "Season not found")
    ),
    tag = "leaderboard"
)]
pub async fn get_season_leaderboard(
    State(db): State<Database>,
    Path(slug): Path<String>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Response, WebError> {
    query.validate().map_err(WebError::BadRequest)?;

    let entries = services::get_season_leaderboard(db.pool(), &slug).await?;

    let response = PaginatedResponse::from_computed(entries, &query.pagination);

    Ok(Json(response).into_response())
}
