//! Repository trait for article storage.

use crate::domain::entities::{Article, ArticleDraft};
use async_trait::async_trait;

/// Failures reported by an [`ArticleRepository`].
///
/// Keeps "the row does not exist" apart from "the store could not answer",
/// so callers can map them to different responses.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("article {0} does not exist")]
    NotFound(i64),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    /// Connection and pool failures mean the store could not answer at all;
    /// everything else is reported as a database error.
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => StoreError::Unavailable(err.to_string()),
            other => StoreError::Database(other),
        }
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Repository interface for managing articles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgArticleRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryArticleRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Inserts a new article. The store assigns `id` and both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] or [`StoreError::Unavailable`] if the
    /// insert fails.
    async fn create(&self, draft: ArticleDraft) -> StoreResult<Article>;

    /// Finds an article by its id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Article))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Article>>;

    /// Lists every article, most recent `publish_date` first.
    ///
    /// Articles sharing a publish date are ordered by descending id.
    async fn list_by_publish_date(&self) -> StoreResult<Vec<Article>>;

    /// Replaces the three mutable fields and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no article has this id.
    async fn update(&self, id: i64, draft: ArticleDraft) -> StoreResult<Article>;

    /// Permanently removes an article.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no article has this id.
    async fn delete(&self, id: i64) -> StoreResult<()>;

    /// Counts stored articles.
    async fn count(&self) -> StoreResult<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_failures_map_to_unavailable() {
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolTimedOut),
            StoreError::Unavailable(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::PoolClosed),
            StoreError::Unavailable(_)
        ));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert!(matches!(
            StoreError::from(sqlx::Error::Io(io)),
            StoreError::Unavailable(_)
        ));
    }

    #[test]
    fn test_query_failures_map_to_database() {
        assert!(matches!(
            StoreError::from(sqlx::Error::RowNotFound),
            StoreError::Database(_)
        ));
        assert!(matches!(
            StoreError::from(sqlx::Error::ColumnNotFound("title".to_string())),
            StoreError::Database(_)
        ));
    }
}
