//! Message HTTP routes
//!
//! `GET/POST /messages`, `GET/PATCH/DELETE /messages/:id`.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chatterbox_core::{BodyUpdate, Message};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST body. Fields are optional so a missing one becomes a validation error, not a rejection.
#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// PATCH body. Anything besides `body` is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub body: Option<String>,
}

pub fn message_routes(state: AppState) -> Router {
    Router::new()
        .route("/messages", get(list_messages).post(create_message))
        .route(
            "/messages/:id",
            get(get_message).patch(update_message).delete(delete_message),
        )
        .with_state(state)
}

/// Non-integer ids cannot match a row, so they are reported as not found.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(raw.to_string()))
}

async fn list_messages(State(state): State<AppState>) -> ApiResult<Json<Vec<Message>>> {
    let messages = state.repo().list_all().await?;
    Ok(Json(messages))
}

async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<CreateMessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Message>)> {
    let Json(request) = payload?;

    let message = state
        .repo()
        .insert_parts(request.body, request.username)
        .await?;

    info!(message_id = message.id, username = %message.username, "Created message");
    Ok((StatusCode::CREATED, Json(message)))
}

async fn get_message(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Message>> {
    let id = parse_id(&raw_id)?;

    state
        .repo()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(raw_id))
}

async fn update_message(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateMessageRequest>, JsonRejection>,
) -> ApiResult<Json<Message>> {
    let id = parse_id(&raw_id)?;
    let Json(request) = payload?;
    let update = BodyUpdate::from_part(request.body)?;

    let message = state.repo().update_body(id, &update).await?;

    info!(message_id = id, "Updated message");
    Ok(Json(message))
}

async fn delete_message(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&raw_id)?;

    state.repo().delete(id).await?;

    info!(message_id = id, "Deleted message");
    Ok(Json(json!({})))
}
