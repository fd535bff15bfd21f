//! Test wiring for the gateway: the real service crates run on in-memory
//! stores, so the full HTTP stack is exercised without Postgres.

use async_trait::async_trait;
use content_service::models::Post;
use content_service::{ContentApi, ListParams, NewPost, PostPage, PostService, PostStore, UpdatePostFields};
use crypto_core::TokenKeys;
use error_types::{Result, ServiceError};
use identity_service::{IdentityService, User, UserStore};
use promo_service::models::Promo;
use promo_service::{PromoService, PromoStore};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub const TEST_SECRET: &str = "gateway-test-secret";

pub fn test_keys() -> TokenKeys {
    TokenKeys::from_secret(TEST_SECRET, 3600)
}

/// Keys that mint tokens already past their expiry, signed with the same
/// secret the app verifies against.
pub fn expired_keys() -> TokenKeys {
    TokenKeys::from_secret(TEST_SECRET, -120)
}

pub fn bearer(keys: &TokenKeys, user_id: Uuid) -> String {
    let token = keys.issue(user_id).unwrap();
    format!("Bearer {}", token)
}

// ============================================================================
// In-memory stores
// ============================================================================

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.login == user.login || u.email == user.email)
        {
            return Err(ServiceError::invalid_argument(
                "login or email already exists",
            ));
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.login == login)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.email == user.email && u.id != user.id)
        {
            return Err(ServiceError::invalid_argument(
                "login or email already exists",
            ));
        }
        if let Some(existing) = users.iter_mut().find(|u| u.id == user.id) {
            *existing = user.clone();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: &Post) -> Result<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
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

#[derive(Default)]
pub struct MemoryPromoStore {
    promos: Mutex<Vec<Promo>>,
}

#[async_trait]
impl PromoStore for MemoryPromoStore {
    async fn insert(&self, promo: &Promo) -> Result<()> {
        let mut promos = self.promos.lock().unwrap();
        if promos.iter().any(|p| p.code == promo.code) {
            return Err(ServiceError::already_exists("Promo code must be unique"));
        }
        promos.push(promo.clone());
        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Promo>> {
        Ok(self
            .promos
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn save(&self, promo: &Promo) -> Result<()> {
        let mut promos = self.promos.lock().unwrap();
        if promos
            .iter()
            .any(|p| p.code == promo.code && p.id != promo.id)
        {
            return Err(ServiceError::already_exists("Promo code must be unique"));
        }
        if let Some(existing) = promos.iter_mut().find(|p| p.id == promo.id) {
            *existing = promo.clone();
        }
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let mut promos = self.promos.lock().unwrap();
        let before = promos.len();
        promos.retain(|p| p.id != id);
        Ok(promos.len() < before)
    }

    async fn list_by_creator(
        &self,
        creator: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Promo>> {
        let mut owned: Vec<Promo> = self
            .promos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.creator_id == creator)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(owned
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_by_creator(&self, creator: Uuid) -> Result<i64> {
        Ok(self
            .promos
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.creator_id == creator)
            .count() as i64)
    }
}

// ============================================================================
// Call-counting wrapper
// ============================================================================

/// Wraps a ContentApi and counts every call, so tests can assert that
/// rejected requests never reach the backend.
pub struct CountingContent {
    inner: Arc<dyn ContentApi>,
    calls: Arc<AtomicUsize>,
}

impl CountingContent {
    pub fn new(inner: Arc<dyn ContentApi>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl ContentApi for CountingContent {
    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_post(new_post).await
    }

    async fn get_post(&self, id: Uuid, requester: Uuid) -> Result<Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_post(id, requester).await
    }

    async fn update_post(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdatePostFields,
    ) -> Result<Post> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.update_post(id, requester, fields).await
    }

    async fn delete_post(&self, id: Uuid, requester: Uuid) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete_post(id, requester).await
    }

    async fn list_posts(&self, requester: Uuid, params: ListParams) -> Result<PostPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list_posts(requester, params).await
    }
}

// ============================================================================
// Client assembly
// ============================================================================

pub fn test_clients() -> api_gateway::ServiceClients {
    api_gateway::ServiceClients::new(
        Arc::new(IdentityService::new(
            Arc::new(MemoryUserStore::default()),
            test_keys(),
        )),
        Arc::new(PostService::new(Arc::new(MemoryPostStore::default()))),
        Arc::new(PromoService::new(Arc::new(MemoryPromoStore::default()))),
    )
}

/// Same assembly as [`test_clients`], with the content backend wrapped in a
/// call counter.
pub fn test_clients_counting_content() -> (api_gateway::ServiceClients, Arc<AtomicUsize>) {
    let (content, calls) = CountingContent::new(Arc::new(PostService::new(Arc::new(
        MemoryPostStore::default(),
    ))));

    (
        api_gateway::ServiceClients::new(
            Arc::new(IdentityService::new(
                Arc::new(MemoryUserStore::default()),
                test_keys(),
            )),
            Arc::new(content),
            Arc::new(PromoService::new(Arc::new(MemoryPromoStore::default()))),
        ),
        calls,
    )
}
