//! Handlers for the article endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::article::{ArticlePayload, ArticleResource, ArticleSummary};
use crate::api::dto::envelope::ApiResponse;
use crate::api::extractors::ValidatedJson;
use crate::application::services::article_service::NOT_FOUND_MESSAGE;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all articles, most recent `publish_date` first.
///
/// # Endpoint
///
/// `GET /v1/list-articles`
///
/// # Response
///
/// ```json
/// {
///   "status": 200,
///   "message": "Liste des articles",
///   "data": [
///     { "title": "A", "content": "B", "publish_date": "2024-01-01" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with `"Article empty"` when there are no articles.
pub async fn list_articles_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ArticleSummary>>>, AppError> {
    let articles = state.article_service.list_articles().await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK,
        "Liste des articles",
        articles.into_iter().map(ArticleSummary::from).collect(),
    )))
}

/// Creates an article.
///
/// # Endpoint
///
/// `POST /v1/store-article`
///
/// # Request Body
///
/// ```json
/// { "title": "A", "content": "B", "publish_date": "2024-01-01" }
/// ```
///
/// # Errors
///
/// Returns 400 with a per-field `errors` map if validation fails.
/// Returns 500 if the article could not be stored.
pub async fn store_article_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ArticlePayload>,
) -> Result<(StatusCode, Json<ApiResponse<ArticleResource>>), AppError> {
    let article = state
        .article_service
        .create_article(payload.into_draft()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(
            StatusCode::CREATED,
            "Article created successfully",
            article.into(),
        )),
    ))
}

/// Replaces the title, content and publish date of an article.
///
/// # Endpoint
///
/// `PUT /v1/update-article/{id}`
///
/// The body is validated before the id is looked up.
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if no article has this id.
/// Returns 500 if the update failed for another reason.
pub async fn update_article_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ArticlePayload>,
) -> Result<Json<ApiResponse<ArticleResource>>, AppError> {
    let draft = payload.into_draft()?;
    let id = parse_article_id(&id)?;

    let article = state.article_service.update_article(id, draft).await?;

    Ok(Json(ApiResponse::new(
        StatusCode::OK,
        "Article updated successfully",
        article.into(),
    )))
}

/// Permanently deletes an article.
///
/// # Endpoint
///
/// `DELETE /v1/delete-article/{id}`
///
/// Responds `204 No Content` with an empty body.
///
/// # Errors
///
/// Returns 404 if no article has this id.
/// Returns 500 if the delete failed for another reason.
pub async fn delete_article_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_article_id(&id)?;

    state.article_service.delete_article(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Ids are positive integers; any other path segment cannot name an article.
fn parse_article_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
}
