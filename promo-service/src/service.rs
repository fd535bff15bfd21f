//! Promo business rules: validation, strict ownership, code uniqueness,
//! pagination.

use crate::db::PromoStore;
use crate::models::{ListParams, NewPromo, Promo, PromoPage, UpdatePromoFields};
use async_trait::async_trait;
use chrono::Utc;
use error_types::{Result, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

const NAME_MAX_LEN: usize = 100;
const DESCRIPTION_MAX_LEN: usize = 500;
const CODE_MAX_LEN: usize = 50;

/// Operations the gateway may invoke on the promotion service.
#[async_trait]
pub trait PromoApi: Send + Sync {
    async fn create_promo(&self, new_promo: NewPromo) -> Result<Promo>;
    async fn get_promo(&self, id: Uuid, requester: Uuid) -> Result<Promo>;
    async fn update_promo(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdatePromoFields,
    ) -> Result<Promo>;
    async fn delete_promo(&self, id: Uuid, requester: Uuid) -> Result<()>;
    async fn list_promos(&self, creator: Uuid, params: ListParams) -> Result<PromoPage>;
}

pub struct PromoService {
    store: Arc<dyn PromoStore>,
}

impl PromoService {
    pub fn new(store: Arc<dyn PromoStore>) -> Self {
        Self { store }
    }

    /// Existence check precedes the ownership check, same ordering as every
    /// other promo operation. There is no visibility concept here: a promo
    /// that exists but belongs to someone else is always denied.
    async fn load_owned(&self, id: Uuid, requester: Uuid) -> Result<Promo> {
        let promo = self
            .store
            .find(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Promo not found"))?;

        if promo.creator_id != requester {
            return Err(ServiceError::permission_denied("Access denied"));
        }

        Ok(promo)
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ServiceError::invalid_argument("name is required"));
    }
    if name.chars().count() > NAME_MAX_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "name must be at most {} characters",
            NAME_MAX_LEN
        )));
    }
    Ok(())
}

fn validate_code(code: &str) -> Result<()> {
    if code.is_empty() {
        return Err(ServiceError::invalid_argument("code is required"));
    }
    if code.chars().count() > CODE_MAX_LEN {
        return Err(ServiceError::invalid_argument(format!(
            "code must be at most {} characters",
            CODE_MAX_LEN
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
impl PromoApi for PromoService {
    async fn create_promo(&self, new_promo: NewPromo) -> Result<Promo> {
        validate_name(&new_promo.name)?;
        validate_code(&new_promo.code)?;
        if let Some(description) = &new_promo.description {
            validate_description(description)?;
        }

        let now = Utc::now();
        let promo = Promo {
            id: Uuid::new_v4(),
            name: new_promo.name,
            description: new_promo.description,
            creator_id: new_promo.creator_id,
            discount: new_promo.discount,
            code: new_promo.code,
            created_at: now,
            updated_at: now,
        };

        // The store rejects a colliding code atomically; nothing is persisted
        // on conflict.
        self.store.insert(&promo).await?;
        tracing::info!(promo_id = %promo.id, creator_id = %promo.creator_id, "promo created");

        Ok(promo)
    }

    async fn get_promo(&self, id: Uuid, requester: Uuid) -> Result<Promo> {
        self.load_owned(id, requester).await
    }

    async fn update_promo(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdatePromoFields,
    ) -> Result<Promo> {
        let mut promo = self.load_owned(id, requester).await?;

        if let Some(name) = &fields.name {
            validate_name(name)?;
        }
        if let Some(code) = &fields.code {
            validate_code(code)?;
        }
        if let Some(description) = &fields.description {
            validate_description(description)?;
        }

        if let Some(name) = fields.name {
            promo.name = name;
        }
        if let Some(description) = fields.description {
            promo.description = Some(description);
        }
        if let Some(discount) = fields.discount {
            promo.discount = discount;
        }
        if let Some(code) = fields.code {
            promo.code = code;
        }
        promo.updated_at = Utc::now();

        // Re-setting the code re-checks uniqueness against all other promos;
        // writing the row's own code back is not a collision.
        self.store.save(&promo).await?;

        Ok(promo)
    }

    async fn delete_promo(&self, id: Uuid, requester: Uuid) -> Result<()> {
        self.load_owned(id, requester).await?;
        self.store.remove(id).await?;
        tracing::info!(promo_id = %id, "promo deleted");

        Ok(())
    }

    async fn list_promos(&self, creator: Uuid, params: ListParams) -> Result<PromoPage> {
        let (_, per_page) = params.clamped();
        let offset = params.offset();

        let total = self.store.count_by_creator(creator).await?;
        let promos = self
            .store
            .list_by_creator(creator, per_page, offset)
            .await?;

        Ok(PromoPage { promos, total })
    }
}
