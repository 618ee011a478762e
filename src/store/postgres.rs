use std::time::Duration;

use async_trait::async_trait;
use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};

use super::Store;
use crate::{
    error::{AppError, AppResult},
    models::{Comment, Post, PostKind},
};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations/postgres");

const MAX_CONNECT_RETRIES: u32 = 5;

/// Remote managed Postgres backend.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects with retry, since the database may come up after the app.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let mut retry_count = 0;
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(3))
                .connect(url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) => {
                    retry_count += 1;
                    if retry_count > MAX_CONNECT_RETRIES {
                        return Err(AppError::InternalServerError(format!(
                            "Failed to connect to database after {} retries: {}",
                            MAX_CONNECT_RETRIES, e
                        )));
                    }
                    tracing::warn!(
                        "Database not ready, retrying in 2s... (Attempt {})",
                        retry_count
                    );
                    tokio::time::sleep(Duration::from_secs(2)).await;
                }
            }
        };

        tracing::info!("Database connected...");
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> AppResult<()> {
        tracing::info!("Running migrations...");
        MIGRATOR.run(&self.pool).await?;
        tracing::info!("Migrations applied successfully.");
        Ok(())
    }
}

#[async_trait]
impl Store for PgStore {
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
            "INSERT INTO {} (content) VALUES ($1) RETURNING id, content, hearts, created_at",
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
            "SELECT id, content, hearts, created_at FROM {} WHERE id = $1",
            kind.table()
        );
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(post)
    }

    async fn set_hearts(&self, kind: PostKind, id: i64, hearts: i32) -> AppResult<bool> {
        let sql = format!("UPDATE {} SET hearts = $1 WHERE id = $2", kind.table());
        let result = sqlx::query(&sql)
            .bind(hearts)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn apply_like(&self, kind: PostKind, id: i64, liked: bool) -> AppResult<Option<i32>> {
        let sql = format!(
            r#"
            UPDATE {}
            SET hearts = CASE WHEN $1 THEN hearts + 1 ELSE GREATEST(0, hearts - 1) END
            WHERE id = $2
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
            WHERE act_id = $1
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
            VALUES ($1, $2)
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
