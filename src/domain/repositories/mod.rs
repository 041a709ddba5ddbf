//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_article.rs` for usage examples.

pub mod article_repository;

pub use article_repository::{ArticleRepository, StoreError};

#[cfg(test)]
pub use article_repository::MockArticleRepository;
