use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validate_not_blank;

/// Represents the 'comments' table in the database.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub act_id: i64,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for creating a new comment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(
        custom(function = validate_not_blank, message = "Comment content is required"),
        length(max = 1000, message = "Comment must be 1000 characters or less")
    )]
    pub content: String,
}
