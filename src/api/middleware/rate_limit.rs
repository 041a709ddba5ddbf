//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::Response;
use axum::response::IntoResponse;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer, governor::GovernorConfigBuilder,
    key_extractor::PeerIpKeyExtractor,
};

use crate::error::AppError;

/// Creates a per-IP rate limiter.
///
/// # Limits
///
/// - **Rate**: one request replenished every `per_second` seconds
/// - **Burst**: up to `burst` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests` with the
/// standard error envelope.
///
/// # Key Extraction
///
/// Limits are keyed by the socket peer address, so the service must be served
/// with `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if either value is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/store-article", post(store_article_handler))
///     .layer(rate_limit::layer(2, 100)?);
/// ```
pub fn layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, Body>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(per_second)
        .burst_size(burst)
        .finish()
        .context("Rate limit values must be greater than zero")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)).error_handler(error_response))
}

/// Renders limiter rejections as the JSON error envelope, keeping any
/// rate limit headers the limiter attached.
fn error_response(error: GovernorError) -> Response<Body> {
    let (app_error, headers) = match error {
        GovernorError::TooManyRequests { headers, .. } => {
            (AppError::too_many_requests("Too Many Requests"), headers)
        }
        GovernorError::UnableToExtractKey => {
            tracing::error!("Rate limiter could not identify the client address");
            (AppError::internal("Failed to identify client"), None)
        }
        GovernorError::Other { msg, headers, .. } => {
            tracing::error!(detail = ?msg, "Rate limiter rejected request");
            (AppError::internal("Failed to identify client"), headers)
        }
    };

    let mut response = app_error.into_response();
    if let Some(headers) = headers {
        response.headers_mut().extend(headers);
    }
    response
}
