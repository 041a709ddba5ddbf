//! Article repository implementations.
//!
//! - [`PgArticleRepository`] - PostgreSQL storage through SQLx
//! - [`InMemoryArticleRepository`] - process-local storage for development and tests

pub mod memory_article_repository;
pub mod pg_article_repository;

pub use memory_article_repository::InMemoryArticleRepository;
pub use pg_article_repository::PgArticleRepository;
