use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{
    SqlitePool,
    migrate::Migrator,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use super::Store;
use crate::{
    error::AppResult,
    models::{Comment, Post, PostKind},
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations/sqlite");

const IN_MEMORY: &str = ":memory:";

/// Local file-backed SQLite backend.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file at `path`.
    /// `:memory:` opens a private in-memory database held by a single
    /// long-lived connection.
    pub async fn connect(path: &str) -> AppResult<Self> {
        let pool = if path == IN_MEMORY {
            let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            let options = SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
                .foreign_keys(true);
            SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(options)
                .await?
        };

        Ok(Self::new(pool))
    }

    /// Fresh in-memory store with the schema applied.
    pub async fn in_memory() -> AppResult<Self> {
        let store = Self::connect(IN_MEMORY).await?;
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> AppResult<()> {
        tracing::info!("Running migrations...");
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Migrations applied successfully.");
        Ok(())
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_posts(&self, kind: PostKind) -> AppResult<Vec<Post>> {
        let sql = format!(
            "SELECT id, content, hearts, created_at FROM {} ORDER BY created_at DESC, id DESC",
            kind.table()
        );
        let posts = sqlx::query_as::<_, Post>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(posts)
    }

    async fn create_post(&self, kind: PostKind, content: &str) -> AppResult<Post> {
        let sql = format!(
            "INSERT INTO {} (content) VALUES (?) RETURNING id, content, hearts, created_at",
            kind.table()
        );
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(content)
            .fetch_one(&self.pool)
            .await?;
        Ok(post)
    }

    async fn get_post(&self, kind: PostKind, id: i64) -> AppResult<Option<Post>> {
        let sql = format!(
            "SELECT id, content, hearts, created_at FROM {} WHERE id = ?",
            kind.table()
        );
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn set_hearts(&self, kind: PostKind, id: i64, hearts: i32) -> AppResult<bool> {
        let sql = format!("UPDATE {} SET hearts = ? WHERE id = ?", kind.table());
        let result = sqlx::query(&sql)
            .bind(hearts)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn apply_like(&self, kind: PostKind, id: i64, liked: bool) -> AppResult<Option<i32>> {
        // Scalar MAX() here plays the role of Postgres' GREATEST().
        let sql = format!(
            r#"
            UPDATE {}
            SET hearts = CASE WHEN ? THEN hearts + 1 ELSE MAX(0, hearts - 1) END
            WHERE id = ?
            RETURNING hearts
            "#,
            kind.table()
        );
        let hearts = sqlx::query_scalar::<_, i32>(&sql)
            .bind(liked)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(hearts)
    }

    async fn count_posts(&self, kind: PostKind) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", kind.table());
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_comments(&self, act_id: i64) -> AppResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, act_id, content, created_at
            FROM comments
            WHERE act_id = ?
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(act_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    async fn create_comment(&self, act_id: i64, content: &str) -> AppResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (act_id, content)
            VALUES (?, ?)
            RETURNING id, act_id, content, created_at
            "#,
        )
        .bind(act_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;
        Ok(comment)
    }
}
