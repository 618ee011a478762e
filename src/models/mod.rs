// src/models/mod.rs

pub mod comment;
pub mod post;

pub use comment::{Comment, CreateCommentRequest};
pub use post::{CreateActRequest, CreateIdeaRequest, HeartsResponse, LikeRequest, Post, PostKind};

/// Rejects content that is empty once surrounding whitespace is removed.
fn validate_not_blank(content: &str) -> Result<(), validator::ValidationError> {
    if content.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}
