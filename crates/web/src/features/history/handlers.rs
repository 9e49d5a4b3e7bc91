use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::history::UserHistoryResponse};
use uuid::Uuid;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/seasons/{slug}/members/{user_id}/history",
    params(
        ("slug" = String, Path, description = "Season slug"),
        ("user_id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 200, description = "Member's scored predictions, weekly totals and season total", body = UserHistoryResponse),
        (status = 404, description = "Season not found")
    ),
    tag = "history"
)]
pub async fn get_member_history(
    State(db): State<Database>,
    Path((slug, user_id)): Path<(String, Uuid)>,
) -> Result<Response, WebError> {
    let history = services::get_member_history(db.pool(), &slug, user_id).await?;

    Ok(Json(history).into_response())
}
