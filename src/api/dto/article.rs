//! DTOs for the article endpoints.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::domain::entities::{Article, ArticleDraft};
use crate::error::AppError;

const TITLE_REQUIRED: &str = "The title field is required.";
const TITLE_STRING: &str = "The title field must be a string.";
const CONTENT_REQUIRED: &str = "The content field is required.";
const CONTENT_STRING: &str = "The content field must be a string.";
const PUBLISH_DATE_REQUIRED: &str = "The publish date field is required.";
const PUBLISH_DATE_INVALID: &str = "The publish date field must be a valid date.";

/// Request body for `POST /v1/store-article` and `PUT /v1/update-article/{id}`.
///
/// Fields are kept as raw JSON values so that a missing or wrongly typed
/// field is reported by the validation rules below, under its own name,
/// instead of failing deserialization of the whole body.
///
/// # Rules
///
/// | Field          | Rule                         |
/// |----------------|------------------------------|
/// | `title`        | required, string, not blank  |
/// | `content`      | required, string, not blank  |
/// | `publish_date` | required, valid date string  |
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ArticlePayload {
    #[validate(
        required(message = "The title field is required."),
        custom(function = "validate_title")
    )]
    pub title: Option<Value>,

    #[validate(
        required(message = "The content field is required."),
        custom(function = "validate_content")
    )]
    pub content: Option<Value>,

    #[validate(
        required(message = "The publish date field is required."),
        custom(function = "validate_publish_date")
    )]
    pub publish_date: Option<Value>,
}

impl ArticlePayload {
    /// Converts a validated payload into a domain draft.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the payload does not pass its rules.
    pub fn into_draft(self) -> Result<ArticleDraft, AppError> {
        self.validate()?;

        let publish_date = self
            .publish_date
            .as_ref()
            .and_then(Value::as_str)
            .and_then(parse_publish_date)
            .ok_or_else(|| {
                AppError::validation(
                    "Validation failed",
                    [(
                        "publish_date".to_string(),
                        vec![PUBLISH_DATE_INVALID.to_string()],
                    )]
                    .into(),
                )
            })?;

        Ok(ArticleDraft::new(
            into_text(self.title),
            into_text(self.content),
            publish_date,
        ))
    }
}

fn into_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

/// Parses the accepted publish date formats into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and
/// RFC 3339 timestamps. The time part, if any, is discarded.
pub fn parse_publish_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime.date());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

fn rule_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn required_text(
    value: &Value,
    required: &'static str,
    not_string: &'static str,
) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(rule_error("required", required)),
        Value::String(text) if text.trim().is_empty() => Err(rule_error("required", required)),
        Value::String(_) => Ok(()),
        _ => Err(rule_error("string", not_string)),
    }
}

fn validate_title(value: &Value) -> Result<(), ValidationError> {
    required_text(value, TITLE_REQUIRED, TITLE_STRING)
}

fn validate_content(value: &Value) -> Result<(), ValidationError> {
    required_text(value, CONTENT_REQUIRED, CONTENT_STRING)
}

fn validate_publish_date(value: &Value) -> Result<(), ValidationError> {
    required_text(value, PUBLISH_DATE_REQUIRED, PUBLISH_DATE_INVALID)?;

    if value.as_str().and_then(parse_publish_date).is_none() {
        return Err(rule_error("date", PUBLISH_DATE_INVALID));
    }
    Ok(())
}

/// Full article representation returned by create and update.
#[derive(Debug, Serialize)]
pub struct ArticleResource {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publish_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleResource {
    fn from(a: Article) -> Self {
        Self {
            id: a.id,
            title: a.title,
            content: a.content,
            publish_date: a.publish_date,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// List projection. Leaves out `id` and the timestamps.
#[derive(Debug, Serialize)]
pub struct ArticleSummary {
    pub title: String,
    pub content: String,
    pub publish_date: NaiveDate,
}

impl From<Article> for ArticleSummary {
    fn from(a: Article) -> Self {
        Self {
            title: a.title,
            content: a.content,
            publish_date: a.publish_date,
        }
    }
}
