use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use super::{AppJson, parse_id};
use crate::{
    error::AppError,
    models::{CreateCommentRequest, PostKind},
    store::DynStore,
};

/// List all comments for an act, oldest first.
/// An unknown act simply has no comments.
pub async fn list_comments(
    State(store): State<DynStore>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let act_id = parse_id(&id, PostKind::Act)?;

    let comments = store.list_comments(act_id).await.map_err(|e| {
        tracing::error!("Failed to list comments: {:?}", e);
        e
    })?;

    Ok(Json(comments))
}

/// Create a new comment on an existing act.
pub async fn create_comment(
    State(store): State<DynStore>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let act_id = parse_id(&id, PostKind::Act)?;

    // 1. Parent must exist
    store
        .get_post(PostKind::Act, act_id)
        .await?
        .ok_or(AppError::NotFound("Act not found".to_string()))?;

    // 2. Validate payload
    payload.validate()?;

    // 3. Insert Comment
    let comment = store
        .create_comment(act_id, payload.content.trim())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create comment: {:?}", e);
            e
        })?;

    Ok((StatusCode::CREATED, Json(comment)))
}
