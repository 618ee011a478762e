use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use super::AppJson;
use crate::{
    error::AppError,
    models::{CreateActRequest, LikeRequest, PostKind},
    store::DynStore,
};

/// List all acts (Recent first).
pub async fn list_acts(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let acts = store.list_posts(PostKind::Act).await.map_err(|e| {
        tracing::error!("Failed to list acts: {:?}", e);
        e
    })?;

    Ok(Json(acts))
}

/// Share a new act of kindness.
pub async fn create_act(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<CreateActRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let act = store
        .create_post(PostKind::Act, payload.content.trim())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create act: {:?}", e);
            e
        })?;

    Ok((StatusCode::CREATED, Json(act)))
}

/// Like or unlike an act. Responds with the new heart count.
pub async fn like_act(
    State(store): State<DynStore>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<LikeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let hearts = super::like(&store, PostKind::Act, &id, payload.liked).await?;
    Ok(Json(hearts))
}
