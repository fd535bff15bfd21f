//! Post business rules: validation, ownership, visibility, pagination.

use crate::db::PostStore;
use crate::models::{ListParams, NewPost, Post, PostPage, UpdatePostFields};
use async_trait::async_trait;
use chrono::Utc;
use error_types::{Result, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

const TITLE_MAX_LEN: usize = 100;
const DESCRIPTION_MAX_LEN: usize = 500;

/// Operations the gateway may invoke on the content service.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn create_post(&self, new_post: NewPost) -> Result<Post>;
    async fn get_post(&self, id: Uuid, requester: Uuid) -> Result<Post>;
    async fn update_post(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdatePostFields,
    ) -> Result<Post>;
    async fn delete_post(&self, id: Uuid, requester: Uuid) -> Result<()>;
    async fn list_posts(&self, requester: Uuid, params: ListParams) -> Result<PostPage>;
}

pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Existence check always precedes the ownership check so that every
    /// mutating operation reports the same ordering of failures.
    async fn load_owned(&self, id: Uuid, requester: Uuid) -> Result<Post> {
        let post = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post not found"))?;

        if post.creator_id != requester {
            return Err(ServiceError::permission_denied("Access denied"));
        }

        Ok(post)
    }
}

fn validate_title(title: &str) -> Result<()> {
    if title.is_empty() {
        return Err(ServiceError::invalid_argument("title is required"));
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "title must be at most {} characters",
            TITLE_MAX_LEN
        )));
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "description must be at most {} characters",
            DESCRIPTION_MAX_LEN
        )));
    }
    Ok(())
}

#[async_trait]
impl ContentApi for PostService {
    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        validate_title(&new_post.title)?;
        if let Some(description) = &new_post.description {
            validate_description(description)?;
        }

        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            title: new_post.title,
            description: new_post.description,
            creator_id: new_post.creator_id,
            is_private: new_post.is_private.unwrap_or(false),
            tags: new_post.tags.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&post).await?;
        tracing::info!(post_id = %post.id, creator_id = %post.creator_id, "post created");

        Ok(post)
    }

    async fn get_post(&self, id: Uuid, requester: Uuid) -> Result<Post> {
        let post = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post not found"))?;

        if !post.visible_to(requester) {
            return Err(ServiceError::permission_denied("Access denied"));
        }

        Ok(post)
    }

    async fn update_post(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdatePostFields,
    ) -> Result<Post> {
        // Ownership is established before any field is touched; a failed
        // authorization leaves the row unmodified.
        let mut post = self.load_owned(id, requester).await?;

        if let Some(title) = &fields.title {
            validate_title(title)?;
        }
        if let Some(description) = &fields.description {
            validate_description(description)?;
        }

        if let Some(title) = fields.title {
            post.title = title;
        }
        if let Some(description) = fields.description {
            post.description = Some(description);
        }
        if let Some(is_private) = fields.is_private {
            post.is_private = is_private;
        }
        if let Some(tags) = fields.tags {
            post.tags = tags;
        }
        post.updated_at = Utc::now();

        self.store.save(&post).await?;

        Ok(post)
    }

    async fn delete_post(&self, id: Uuid, requester: Uuid) -> Result<()> {
        self.load_owned(id, requester).await?;
        self.store.remove(id).await?;
        tracing::info!(post_id = %id, "post deleted");

        Ok(())
    }

    async fn list_posts(&self, requester: Uuid, params: ListParams) -> Result<PostPage> {
        let (_, per_page) = params.clamped();
        let offset = params.offset();

        let total = self.store.count_visible_to(requester).await?;
        let posts = self
            .store
            .list_visible_to(requester, per_page, offset)
            .await?;

        Ok(PostPage { posts, total })
    }
}
