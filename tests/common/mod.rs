#![allow(dead_code)]

use article_api::domain::entities::{Article, ArticleDraft};
use article_api::domain::repositories::article_repository::StoreResult;
use article_api::domain::repositories::{ArticleRepository, StoreError};
use article_api::infrastructure::persistence::InMemoryArticleRepository;
use article_api::state::AppState;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use std::sync::Arc;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn create_test_state() -> (AppState, Arc<InMemoryArticleRepository>) {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let state = AppState::new(repo.clone());
    (state, repo)
}

pub async fn create_test_article(
    repo: &InMemoryArticleRepository,
    title: &str,
    publish_date: NaiveDate,
) -> Article {
    repo.create(ArticleDraft::new(title, "Body", publish_date))
        .await
        .unwrap()
}

pub async fn insert_article(pool: &PgPool, title: &str, publish_date: NaiveDate) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO articles (title, content, publish_date) VALUES ($1, 'Body', $2) RETURNING id",
    )
    .bind(title)
    .bind(publish_date)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// A store that fails every call, as an unreachable database would.
pub struct FailingRepository;

fn down() -> StoreError {
    StoreError::Unavailable("connection refused: secret-db-host:5432".to_string())
}

#[async_trait]
impl ArticleRepository for FailingRepository {
    async fn create(&self, _draft: ArticleDraft) -> StoreResult<Article> {
        Err(down())
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Article>> {
        Err(down())
    }

    async fn list_by_publish_date(&self) -> StoreResult<Vec<Article>> {
        Err(down())
    }

    async fn update(&self, _id: i64, _draft: ArticleDraft) -> StoreResult<Article> {
        Err(down())
    }

    async fn delete(&self, _id: i64) -> StoreResult<()> {
        Err(down())
    }

    async fn count(&self) -> StoreResult<i64> {
        Err(down())
    }
}

pub fn create_failing_state() -> AppState {
    AppState::new(Arc::new(FailingRepository))
}
