use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use validator::Validate;

use super::AppJson;
use crate::{
    catalog::{self, Category},
    error::AppError,
    models::{CreateIdeaRequest, LikeRequest, PostKind},
    store::DynStore,
};

/// List community ideas (Recent first).
pub async fn list_ideas(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let ideas = store.list_posts(PostKind::Idea).await.map_err(|e| {
        tracing::error!("Failed to list ideas: {:?}", e);
        e
    })?;

    Ok(Json(ideas))
}

/// Submit a new idea.
pub async fn create_idea(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<CreateIdeaRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let idea = store
        .create_post(PostKind::Idea, payload.content.trim())
        .await
        .map_err(|e| {
            tracing::error!("Failed to create idea: {:?}", e);
            e
        })?;

    Ok((StatusCode::CREATED, Json(idea)))
}

pub async fn like_idea(
    State(store): State<DynStore>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<LikeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let hearts = super::like(&store, PostKind::Idea, &id, payload.liked).await?;
    Ok(Json(hearts))
}

/// The curated suggestion catalog.
pub async fn list_suggestions() -> Json<&'static [Category]> {
    Json(catalog::CATEGORIES)
}
