//! Persistence layer.
//!
//! Handlers only ever see [`DynStore`]; which backend sits behind it is
//! decided once at startup from [`StorageConfig`].

mod postgres;
mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::{Config, StorageConfig},
    error::AppResult,
    models::{Comment, Post, PostKind},
};

pub use postgres::PgStore;
pub use sqlite::SqliteStore;

/// Shared storage handle injected into request handlers.
pub type DynStore = Arc<dyn Store>;

/// Create/read operations over acts, ideas and comments.
///
/// Both implementations return identical shapes and orderings.
#[async_trait]
pub trait Store: Send + Sync {
    /// All rows of `kind`, newest first.
    async fn list_posts(&self, kind: PostKind) -> AppResult<Vec<Post>>;

    /// Inserts a row with zero hearts and returns it as stored.
    async fn create_post(&self, kind: PostKind, content: &str) -> AppResult<Post>;

    async fn get_post(&self, kind: PostKind, id: i64) -> AppResult<Option<Post>>;

    /// Overwrites the heart counter. Returns `false` when no row matched.
    async fn set_hearts(&self, kind: PostKind, id: i64, hearts: i32) -> AppResult<bool>;

    /// Adds one heart when `liked`, otherwise removes one without going
    /// below zero, in a single statement. Returns the new count, or `None`
    /// when the row does not exist.
    async fn apply_like(&self, kind: PostKind, id: i64, liked: bool) -> AppResult<Option<i32>>;

    async fn count_posts(&self, kind: PostKind) -> AppResult<i64>;

    /// Comments on one act, oldest first.
    async fn list_comments(&self, act_id: i64) -> AppResult<Vec<Comment>>;

    async fn create_comment(&self, act_id: i64, content: &str) -> AppResult<Comment>;
}

/// Opens the configured backend and brings its schema up to date.
pub async fn connect(config: &Config) -> AppResult<DynStore> {
    match &config.storage {
        StorageConfig::Postgres { url } => {
            tracing::info!("Using Postgres storage");
            let store = PgStore::connect(url).await?;
            store.migrate().await?;
            Ok(Arc::new(store))
        }
        StorageConfig::Sqlite { path } => {
            tracing::info!("Using SQLite storage at {}", path);
            let store = SqliteStore::connect(path).await?;
            store.migrate().await?;
            Ok(Arc::new(store))
        }
    }
}
