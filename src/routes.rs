//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health` - Health check of the article store
//! - `/v1/*`        - Article API (rate limited)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on `/v1`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_per_second` / `rate_burst` - per-IP limits applied to `/v1`
///
/// # Errors
///
/// Returns an error if the rate limit values are invalid.
pub fn app_router(
    state: AppState,
    rate_per_second: u64,
    rate_burst: u32,
) -> Result<NormalizePath<Router>> {
    let api_router =
        api::routes::article_routes().layer(rate_limit::layer(rate_per_second, rate_burst)?);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
