//! PostgreSQL implementation of the article repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Article, ArticleDraft};
use crate::domain::repositories::article_repository::StoreResult;
use crate::domain::repositories::{ArticleRepository, StoreError};

#[derive(sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    publish_date: NaiveDate,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ArticleRow> for Article {
    fn from(r: ArticleRow) -> Self {
        Article::new(
            r.id,
            r.title,
            r.content,
            r.publish_date,
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for article storage.
///
/// Every operation is a single statement, so it runs in its own implicit
/// transaction. Uses bound parameters throughout.
pub struct PgArticleRepository {
    pool: Arc<PgPool>,
}

impl PgArticleRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    async fn create(&self, draft: ArticleDraft) -> StoreResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            INSERT INTO articles (title, content, publish_date)
            VALUES ($1, $2, $3)
            RETURNING id, title, content, publish_date, created_at, updated_at
            "#,
        )
        .bind(draft.title)
        .bind(draft.content)
        .bind(draft.publish_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, publish_date, created_at, updated_at
            FROM articles
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Article::from))
    }

    async fn list_by_publish_date(&self) -> StoreResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            r#"
            SELECT id, title, content, publish_date, created_at, updated_at
            FROM articles
            ORDER BY publish_date DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Article::from).collect())
    }

    async fn update(&self, id: i64, draft: ArticleDraft) -> StoreResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            r#"
            UPDATE articles SET
                title        = $2,
                content      = $3,
                publish_date = $4,
                updated_at   = NOW()
            WHERE id = $1
            RETURNING id, title, content, publish_date, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(draft.title)
        .bind(draft.content)
        .bind(draft.publish_date)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Article::from).ok_or(StoreError::NotFound(id))
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
