//! API route configuration.

use crate::api::handlers::{
    delete_article_handler, list_articles_handler, store_article_handler, update_article_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Article routes, mounted under `/v1`.
///
/// # Endpoints
///
/// - `GET    /list-articles`        - List articles, latest publish date first
/// - `POST   /store-article`        - Create an article
/// - `PUT    /update-article/{id}`  - Replace an article's fields
/// - `DELETE /delete-article/{id}`  - Delete an article
pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/list-articles", get(list_articles_handler))
        .route("/store-article", post(store_article_handler))
        .route("/update-article/{id}", put(update_article_handler))
        .route("/delete-article/{id}", delete(delete_article_handler))
}
