//! Core domain entities.
//!
//! - [`Article`] - A stored article, including its system-managed fields
//! - [`ArticleDraft`] - The three caller-supplied fields, used for both
//!   inserts and full-replace updates

pub mod article;

pub use article::{Article, ArticleDraft};
