//! Data model for the content service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A post row. `creator_id` is immutable after creation; it is a soft
/// reference to an identity-service user and is never validated here.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub is_private: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Visibility rule: public posts are readable by anyone, private posts
    /// only by their creator.
    pub fn visible_to(&self, requester: Uuid) -> bool {
        !self.is_private || self.creator_id == requester
    }
}

/// Arguments for creating a post. Visibility defaults to public and tags to
/// empty when omitted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub is_private: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Partial update. `None` means the caller omitted the field and it must stay
/// untouched; `Some` applies the value as-is, including empty strings and
/// `false`.
#[derive(Debug, Clone, Default)]
pub struct UpdatePostFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Pagination arguments before clamping.
#[derive(Debug, Clone, Copy)]
pub struct ListParams {
    pub page: i64,
    pub per_page: i64,
}

impl ListParams {
    /// Non-positive values fall back to page 1 and 10 items per page.
    pub fn clamped(self) -> (i64, i64) {
        let page = if self.page > 0 { self.page } else { 1 };
        let per_page = if self.per_page > 0 { self.per_page } else { 10 };
        (page, per_page)
    }

    pub fn offset(self) -> i64 {
        let (page, per_page) = self.clamped();
        (page - 1) * per_page
    }
}

/// One page of posts. `total` counts the full visibility-filtered set, not
/// the slice returned.
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub total: i64,
}
