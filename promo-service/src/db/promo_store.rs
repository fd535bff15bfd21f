//! Promo storage trait and Postgres implementation.
//!
//! Code uniqueness is enforced by the store (unique index in Postgres), so a
//! colliding insert or save fails atomically and persists nothing.

use crate::models::Promo;
use async_trait::async_trait;
use error_types::{is_unique_violation, Result, ServiceError};
use sqlx::{PgPool, Row};
use uuid::Uuid;

#[async_trait]
pub trait PromoStore: Send + Sync {
    /// Fails with `AlreadyExists` when the code collides with another promo.
    async fn insert(&self, promo: &Promo) -> Result<()>;

    async fn find(&self, id: Uuid) -> Result<Option<Promo>>;

    /// Persist mutable fields; fails with `AlreadyExists` when a re-set code
    /// collides with any other promo.
    async fn save(&self, promo: &Promo) -> Result<()>;

    async fn remove(&self, id: Uuid) -> Result<bool>;

    /// Promos owned by `creator`, newest first.
    async fn list_by_creator(&self, creator: Uuid, limit: i64, offset: i64)
        -> Result<Vec<Promo>>;

    async fn count_by_creator(&self, creator: Uuid) -> Result<i64>;
}

fn map_insert_error(err: sqlx::Error) -> ServiceError {
    if is_unique_violation(&err) {
        ServiceError::already_exists("Promo code must be unique")
    } else {
        err.into()
    }
}

/// Postgres-backed promo store.
#[derive(Clone)]
pub struct PgPromoStore {
    pool: PgPool,
}

impl PgPromoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PromoStore for PgPromoStore {
    async fn insert(&self, promo: &Promo) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO promos (id, name, description, creator_id, discount, code,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(promo.id)
        .bind(&promo.name)
        .bind(&promo.description)
        .bind(promo.creator_id)
        .bind(promo.discount)
        .bind(&promo.code)
        .bind(promo.created_at)
        .bind(promo.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn find(&self, id: Uuid) -> Result<Option<Promo>> {
        let promo = sqlx::query_as::<_, Promo>(
            r#"
            SELECT id, name, description, creator_id, discount, code,
                   created_at, updated_at
            FROM promos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(promo)
    }

    async fn save(&self, promo: &Promo) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE promos
            SET name = $2, description = $3, discount = $4, code = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(promo.id)
        .bind(&promo.name)
        .bind(&promo.description)
        .bind(promo.discount)
        .bind(&promo.code)
        .bind(promo.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_insert_error)?;

        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM promos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_creator(
        &self,
        creator: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Promo>> {
        let promos = sqlx::query_as::<_, Promo>(
            r#"
            SELECT id, name, description, creator_id, discount, code,
                   created_at, updated_at
            FROM promos
            WHERE creator_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(creator)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(promos)
    }

    async fn count_by_creator(&self, creator: Uuid) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM promos WHERE creator_id = $1")
            .bind(creator)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("count"))
    }
}
