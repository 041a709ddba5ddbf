//! In-memory implementation of the article repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Article, ArticleDraft};
use crate::domain::repositories::article_repository::StoreResult;
use crate::domain::repositories::{ArticleRepository, StoreError};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Article>,
    last_id: i64,
}

/// A repository that keeps articles in process memory.
///
/// Ids start at 1 and are never reused, even after deletion. Contents are
/// lost when the process exits.
///
/// # Use Cases
///
/// - Local development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - HTTP-level tests
pub struct InMemoryArticleRepository {
    inner: RwLock<Inner>,
}

impl InMemoryArticleRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory article store");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn create(&self, draft: ArticleDraft) -> StoreResult<Article> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;

        let now = Utc::now();
        let article = Article::new(
            inner.last_id,
            draft.title,
            draft.content,
            draft.publish_date,
            now,
            now,
        );
        inner.rows.insert(article.id, article.clone());

        Ok(article)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Article>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list_by_publish_date(&self) -> StoreResult<Vec<Article>> {
        let inner = self.inner.read().await;

        // BTreeMap iterates by ascending id; reversing before the stable sort
        // puts the newer id first among equal dates.
        let mut articles: Vec<Article> = inner.rows.values().rev().cloned().collect();
        articles.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));

        Ok(articles)
    }

    async fn update(&self, id: i64, draft: ArticleDraft) -> StoreResult<Article> {
        let mut inner = self.inner.write().await;
        let article = inner.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        article.apply(draft, Utc::now());

        Ok(article.clone())
    }

    async fn delete(&self, id: i64) -> StoreResult<()> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.inner.read().await.rows.len() as i64)
    }
}
