//! Article entity.

use chrono::{DateTime, NaiveDate, Utc};

/// A persisted article.
///
/// `id`, `created_at` and `updated_at` are assigned by the store. The other
/// three fields are always present on a stored row.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publish_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates a new Article instance.
    pub fn new(
        id: i64,
        title: String,
        content: String,
        publish_date: NaiveDate,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            content,
            publish_date,
            created_at,
            updated_at,
        }
    }

    /// Overwrites the caller-managed fields and bumps `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, draft: ArticleDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.content = draft.content;
        self.publish_date = draft.publish_date;
        self.updated_at = now;
    }
}

/// Input data for creating or replacing an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub publish_date: NaiveDate,
}

impl ArticleDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            publish_date,
        }
    }
}
