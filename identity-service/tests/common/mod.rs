//! In-memory UserStore mirroring the unique indexes on login and email.

use async_trait::async_trait;
use error_types::{Result, ServiceError};
use identity_service::{User, UserStore};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
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
