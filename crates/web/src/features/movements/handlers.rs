use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::{
    Database,
    dto::movement::{ListMovementsQuery, MovementPayload, NewMovement},
    models::Movement,
};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/movements",
    params(ListMovementsQuery),
    responses(
        (status = 200, description = "All movements inside the date range, newest write first", body = Vec<Movement>)
    ),
    tag = "movements"
)]
pub async fn list_movements(
    State(db): State<Database>,
    Query(query): Query<ListMovementsQuery>,
) -> Result<Response, WebError> {
    let movements = services::list_movements(
        db.pool(),
        query.start_date.as_deref(),
        query.end_date.as_deref(),
    )
    .await?;

    Ok(Json(movements).into_response())
}

#[utoipa::path(
    post,
    path = "/api/movements",
    request_body = MovementPayload,
    responses(
        (status = 201, description = "Movement recorded"),
        (status = 400, description = "Invalid body, missing fields, or bad quantity")
    ),
    tag = "movements"
)]
pub async fn create_movement(
    State(db): State<Database>,
    payload: Result<Json<MovementPayload>, JsonRejection>,
) -> Result<Response, WebError> {
    let new = validate_payload(payload)?;

    services::create_movement(db.pool(), &new).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "movement recorded successfully" })),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/movements/{id}",
    params(
        ("id" = i64, Path, description = "Movement id")
    ),
    request_body = MovementPayload,
    responses(
        (status = 200, description = "Movement updated"),
        (status = 400, description = "Invalid body, missing fields, or bad quantity"),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn update_movement(
    State(db): State<Database>,
    Path(id): Path<i64>,
    payload: Result<Json<MovementPayload>, JsonRejection>,
) -> Result<Response, WebError> {
    let new = validate_payload(payload)?;

    services::update_movement(db.pool(), id, &new).await?;

    Ok(Json(json!({ "message": "movement updated successfully" })).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/movements/{id}",
    params(
        ("id" = i64, Path, description = "Movement id")
    ),
    responses(
        (status = 200, description = "Movement deleted"),
        (status = 404, description = "Movement not found")
    ),
    tag = "movements"
)]
pub async fn delete_movement(
    State(db): State<Database>,
    Path(id): Path<i64>,
) -> Result<Response, WebError> {
    services::delete_movement(db.pool(), id).await?;

    Ok(Json(json!({ "message": "movement deleted successfully" })).into_response())
}

/// Unparseable bodies fail before the field rules; both are reported before
/// any write is attempted.
fn validate_payload(
    payload: Result<Json<MovementPayload>, JsonRejection>,
) -> Result<NewMovement, WebError> {
    let Json(payload) = payload.map_err(|_| WebError::InvalidInput)?;
    Ok(payload.validate()?)
}
