use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::validate_not_blank;

/// Maximum length of an act of kindness, in characters.
pub const ACT_MAX_LEN: u64 = 1000;
/// Maximum length of an idea, in characters.
pub const IDEA_MAX_LEN: u64 = 500;

/// The two heart-carrying feeds. They share a row shape but live in
/// separate tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    Act,
    Idea,
}

impl PostKind {
    /// Table holding rows of this kind. Always a static identifier, never
    /// caller input.
    pub const fn table(self) -> &'static str {
        match self {
            PostKind::Act => "acts",
            PostKind::Idea => "ideas",
        }
    }

    /// Human label used in error messages ("Act not found").
    pub const fn label(self) -> &'static str {
        match self {
            PostKind::Act => "Act",
            PostKind::Idea => "Idea",
        }
    }

    pub const fn max_len(self) -> u64 {
        match self {
            PostKind::Act => ACT_MAX_LEN,
            PostKind::Idea => IDEA_MAX_LEN,
        }
    }
}

/// A row of the 'acts' or 'ideas' table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub hearts: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// DTO for sharing a new act of kindness.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateActRequest {
    #[serde(default)]
    #[validate(
        custom(function = validate_not_blank, message = "Content is required"),
        length(max = 1000, message = "Content must be 1000 characters or less")
    )]
    pub content: String,
}

/// DTO for submitting a new idea.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateIdeaRequest {
    #[serde(default)]
    #[validate(
        custom(function = validate_not_blank, message = "Content is required"),
        length(max = 500, message = "Content must be 500 characters or less")
    )]
    pub content: String,
}

/// Like / unlike intent sent by the client.
/// An absent flag counts as an unlike.
#[derive(Debug, Deserialize)]
pub struct LikeRequest {
    #[serde(default)]
    pub liked: bool,
}

/// Counter returned after a like or unlike.
#[derive(Debug, Serialize, Deserialize)]
pub struct HeartsResponse {
    pub hearts: i32,
}
