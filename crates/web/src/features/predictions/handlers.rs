use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::prediction::{PredictionListQuery, PredictionResponse, SubmitPredictionRequest},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    put,
    path = "/api/predictions",
    request_body = SubmitPredictionRequest,
    responses(
        (status = 200, description = "Prediction stored; a resubmission for the same slot replaces the previous pick", body = PredictionResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Schedule not found"),
        (status = 409, description = "Prediction window closed or unknown reference")
    ),
    tag = "predictions"
)]
pub async fn submit_prediction(
    State(db): State<Database>,
    Json(req): Json<SubmitPredictionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let prediction = services::submit_prediction(db.pool(), &req).await?;

    Ok(Json(PredictionResponse::from(prediction)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/predictions/{user_id}",
    params(
        ("user_id" = Uuid, Path, description = "Member id"),
        PredictionListQuery
    ),
    responses(
        (status = 200, description = "Member's picks for the season", body = Vec<PredictionResponse>),
        (status = 404, description = "Season not found")
    ),
    tag = "predictions"
)]
pub async fn list_member_predictions(
    State(db): State<Database>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<PredictionListQuery>,
) -> Result<Response, WebError> {
    let predictions = services::list_member_predictions(db.pool(), user_id, &query.season).await?;

    let response: Vec<PredictionResponse> = predictions
        .into_iter()
        .map(PredictionResponse::from)
        .collect();

    Ok(Json(response).into_response())
}
