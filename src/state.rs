//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ArticleService;
use crate::domain::repositories::ArticleRepository;

/// Application state cloned into each request.
///
/// Holds no per-request data; all article state lives in the repository.
#[derive(Clone)]
pub struct AppState {
    pub article_service: Arc<ArticleService<dyn ArticleRepository>>,
}

impl AppState {
    /// Builds the state around any article repository.
    pub fn new(repository: Arc<dyn ArticleRepository>) -> Self {
        Self {
            article_service: Arc::new(ArticleService::new(repository)),
        }
    }
}
