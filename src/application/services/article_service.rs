//! Article management service.

use crate::domain::entities::{Article, ArticleDraft};
use crate::domain::repositories::{ArticleRepository, StoreError};
use crate::error::AppError;
use std::sync::Arc;

/// Message returned when the store holds no articles.
pub const EMPTY_MESSAGE: &str = "Article empty";
/// Message returned when an id does not match any article.
pub const NOT_FOUND_MESSAGE: &str = "Article not found";

/// Service for the four article operations.
///
/// Each call is independent: the service keeps no state between requests and
/// relies on the repository for ordering and identity.
pub struct ArticleService<R: ArticleRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ArticleRepository + ?Sized> ArticleService<R> {
    /// Creates a new article service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all articles, latest `publish_date` first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the store is empty.
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        let articles = self
            .repository
            .list_by_publish_date()
            .await
            .map_err(|e| internal("Error retrieving data", "Failed to retrieve data", e))?;

        if articles.is_empty() {
            return Err(AppError::not_found(EMPTY_MESSAGE));
        }

        Ok(articles)
    }

    /// Inserts a new article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the insert fails. The cause is logged,
    /// not returned.
    pub async fn create_article(&self, draft: ArticleDraft) -> Result<Article, AppError> {
        let article = self
            .repository
            .create(draft)
            .await
            .map_err(|e| internal("Error storing data", "Failed to store data", e))?;

        tracing::info!(article_id = article.id, "Article created");
        Ok(article)
    }

    /// Replaces the title, content and publish date of an existing article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has this id.
    /// Returns [`AppError::Internal`] on any other failure.
    pub async fn update_article(&self, id: i64, draft: ArticleDraft) -> Result<Article, AppError> {
        const LOG: &str = "Error updating data";
        const MESSAGE: &str = "Failed to update data";

        self.find_existing(id, LOG, MESSAGE).await?;

        let article = self
            .repository
            .update(id, draft)
            .await
            .map_err(|e| map_store_error(LOG, MESSAGE, e))?;

        tracing::info!(article_id = id, "Article updated");
        Ok(article)
    }

    /// Permanently removes an article.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no article has this id.
    /// Returns [`AppError::Internal`] on any other failure.
    pub async fn delete_article(&self, id: i64) -> Result<(), AppError> {
        const LOG: &str = "Error deleting data";
        const MESSAGE: &str = "Failed to delete data";

        self.find_existing(id, LOG, MESSAGE).await?;

        self.repository
            .delete(id)
            .await
            .map_err(|e| map_store_error(LOG, MESSAGE, e))?;

        tracing::info!(article_id = id, "Article deleted");
        Ok(())
    }

    /// Counts stored articles.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn count_articles(&self) -> Result<i64, AppError> {
        self.repository
            .count()
            .await
            .map_err(|e| internal("Error counting data", "Failed to retrieve data", e))
    }

    async fn find_existing(
        &self,
        id: i64,
        log: &'static str,
        message: &'static str,
    ) -> Result<Article, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(|e| map_store_error(log, message, e))?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }
}

/// Maps a store failure, keeping a missing row apart from everything else.
fn map_store_error(log: &'static str, message: &'static str, error: StoreError) -> AppError {
    match error {
        StoreError::NotFound(_) => AppError::not_found(NOT_FOUND_MESSAGE),
        other => internal(log, message, other),
    }
}

fn internal(log: &'static str, message: &'static str, error: StoreError) -> AppError {
    tracing::error!(error = %error, "{log}");
    AppError::internal(message)
}
