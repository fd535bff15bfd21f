//! In-memory PostStore used to exercise the service rules without Postgres.

use async_trait::async_trait;
use content_service::models::Post;
use content_service::PostStore;
use error_types::Result;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    /// Raw snapshot of a stored row, bypassing visibility rules.
    pub fn raw(&self, id: Uuid) -> Option<Post> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: &Post) -> Result<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self.raw(id))
    }

    async fn save(&self, post: &Post) -> Result<()> {
        let mut posts = self.posts.lock().unwrap();
        if let Some(existing) = posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        Ok(posts.len() < before)
    }

    async fn list_visible_to(
        &self,
        requester: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        let mut visible: Vec<Post> = self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.is_private || p.creator_id == requester)
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(visible
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_visible_to(&self, requester: Uuid) -> Result<i64> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| !p.is_private || p.creator_id == requester)
            .count() as i64)
    }
}
