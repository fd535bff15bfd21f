//! In-memory PromoStore mirroring the Postgres unique-index behavior on code.

use async_trait::async_trait;
use error_types::{Result, ServiceError};
use promo_service::models::Promo;
use promo_service::PromoStore;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryPromoStore {
    promos: Mutex<Vec<Promo>>,
}

impl MemoryPromoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.promos.lock().unwrap().len()
    }

    pub fn raw(&self, id: Uuid) -> Option<Promo> {
        self.promos
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }
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
        Ok(self.raw(id))
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
