//! User storage trait and Postgres implementation.

use crate::models::User;
use async_trait::async_trait;
use error_types::{is_unique_violation, Result, ServiceError};
use sqlx::PgPool;
use uuid::Uuid;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account. The unique indexes on login and email are the
    /// backstop for the service-level duplicate checks; a racing duplicate
    /// surfaces as an invalid-argument outcome, same as the pre-check.
    async fn insert(&self, user: &User) -> Result<()>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;
    async fn find_by_login(&self, login: &str) -> Result<Option<User>>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Persist profile fields of an existing account.
    async fn save(&self, user: &User) -> Result<()>;
}

fn map_unique_error(err: sqlx::Error) -> ServiceError {
    if is_unique_violation(&err) {
        ServiceError::invalid_argument("login or email already exists")
    } else {
        err.into()
    }
}

const USER_COLUMNS: &str = "id, login, email, password_hash, first_name, last_name, phone, \
                            date_of_birth, created_at, updated_at";

/// Postgres-backed user store.
#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, login, email, password_hash, first_name, last_name,
                               phone, date_of_birth, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id)
        .bind(&user.login)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.date_of_birth)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_error)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            USER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_login(&self, login: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE login = $1",
            USER_COLUMNS
        ))
        .bind(login)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            USER_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn save(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET email = $2, first_name = $3, last_name = $4, phone = $5,
                date_of_birth = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.date_of_birth)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_unique_error)?;

        Ok(())
    }
}
