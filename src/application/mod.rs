//! Application layer services implementing business logic.
//!
//! Services consume repository traits and translate store outcomes into
//! [`crate::error::AppError`] values for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::article_service::ArticleService`] - Article listing, creation, update and removal

pub mod services;
