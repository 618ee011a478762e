// src/handlers/mod.rs

pub mod acts;
pub mod comments;
pub mod ideas;
pub mod pages;

use axum::extract::FromRequest;

use crate::{
    error::{AppError, AppResult},
    models::{HeartsResponse, PostKind},
    store::DynStore,
};

/// `axum::Json` whose rejections surface as `AppError::BadRequest`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Parses a numeric path identifier ("Invalid act ID" on failure).
pub(crate) fn parse_id(raw: &str, kind: PostKind) -> AppResult<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        AppError::BadRequest(format!("Invalid {} ID", kind.label().to_lowercase()))
    })
}

/// Shared like / unlike flow for acts and ideas.
pub(crate) async fn like(
    store: &DynStore,
    kind: PostKind,
    raw_id: &str,
    liked: bool,
) -> AppResult<HeartsResponse> {
    let id = parse_id(raw_id, kind)?;

    let hearts = store
        .apply_like(kind, id, liked)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update hearts on {} {}: {:?}", kind.table(), id, e);
            e
        })?
        .ok_or_else(|| AppError::NotFound(format!("{} not found", kind.label())))?;

    Ok(HeartsResponse { hearts })
}
