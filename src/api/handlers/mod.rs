//! HTTP request handlers for API endpoints.

pub mod articles;
pub mod health;

pub use articles::{
    delete_article_handler, list_articles_handler, store_article_handler, update_article_handler,
};
pub use health::health_handler;
