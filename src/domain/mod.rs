//! Domain layer containing the article entity and its storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions and their error type
//!
//! The domain layer has no dependencies on the HTTP layer. Repository traits
//! are implemented in [`crate::infrastructure::persistence`], and business
//! rules live in [`crate::application::services`].

pub mod entities;
pub mod repositories;
