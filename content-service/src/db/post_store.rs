//! Post storage: the trait the service logic runs against plus the Postgres
//! implementation. The pool handle is created once at startup and passed in;
//! each call checks a connection out for its own duration only.

use crate::models::Post;
use async_trait::async_trait;
use error_types::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[async_trait]
pub trait PostStore: Send + Sync {
    async fn insert(&self, post: &Post) -> Result<()>;

    async fn find(&self, id: Uuid) -> Result<Option<Post>>;

    /// Persist mutable fields of an existing post. `creator_id` is never
    /// rewritten.
    async fn save(&self, post: &Post) -> Result<()>;

    /// Returns `false` when no row with that id existed.
    async fn remove(&self, id: Uuid) -> Result<bool>;

    /// Posts that are public or owned by `requester`, newest first.
    async fn list_visible_to(&self, requester: Uuid, limit: i64, offset: i64)
        -> Result<Vec<Post>>;

    /// Size of the full visibility-filtered set, independent of paging.
    async fn count_visible_to(&self, requester: Uuid) -> Result<i64>;
}

/// Postgres-backed post store.
#[derive(Clone)]
pub struct PgPostStore {
    pool: PgPool,
}

impl PgPostStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostStore for PgPostStore {
    async fn insert(&self, post: &Post) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (id, title, description, creator_id, is_private, tags,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.creator_id)
        .bind(post.is_private)
        .bind(&post.tags)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, creator_id, is_private, tags,
                   created_at, updated_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    async fn save(&self, post: &Post) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE posts
            SET title = $2, description = $3, is_private = $4, tags = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.description)
        .bind(post.is_private)
        .bind(&post.tags)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_visible_to(
        &self,
        requester: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, description, creator_id, is_private, tags,
                   created_at, updated_at
            FROM posts
            WHERE is_private = FALSE OR creator_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(requester)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn count_visible_to(&self, requester: Uuid) -> Result<i64> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS count FROM posts WHERE is_private = FALSE OR creator_id = $1",
        )
        .bind(requester)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get::<i64, _>("count"))
    }
}
