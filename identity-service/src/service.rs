//! Account business rules: registration, login, profile access.

use crate::db::UserStore;
use crate::models::{AuthToken, RegisterUser, UpdateProfileFields, User, UserProfile};
use crate::security::password;
use crate::validators;
use async_trait::async_trait;
use chrono::Utc;
use crypto_core::TokenKeys;
use error_types::{Result, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

/// Operations the gateway may invoke on the identity service.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    async fn register(&self, req: RegisterUser) -> Result<UserProfile>;
    async fn login(&self, login: &str, password: &str) -> Result<AuthToken>;
    async fn get_profile(&self, id: Uuid, requester: Uuid) -> Result<UserProfile>;
    async fn update_profile(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdateProfileFields,
    ) -> Result<UserProfile>;
}

pub struct IdentityService {
    store: Arc<dyn UserStore>,
    tokens: TokenKeys,
}

impl IdentityService {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenKeys) -> Self {
        Self { store, tokens }
    }

    /// Profile access is strict equality of the token subject against the
    /// requested id.
    fn check_same_user(id: Uuid, requester: Uuid) -> Result<()> {
        if id != requester {
            return Err(ServiceError::permission_denied("Unauthorized"));
        }
        Ok(())
    }
}

#[async_trait]
impl IdentityApi for IdentityService {
    async fn register(&self, req: RegisterUser) -> Result<UserProfile> {
        validators::validate_login(&req.login)?;
        validators::validate_email(&req.email)?;
        validators::validate_password(&req.password)?;

        // Duplicate checks mirror the wire contract: taken login/email is an
        // invalid-argument outcome (400), not a conflict. The unique indexes
        // cover the race where two registrations pass these checks at once.
        if self.store.find_by_login(&req.login).await?.is_some() {
            return Err(ServiceError::invalid_argument("Login already exists"));
        }
        if self.store.find_by_email(&req.email).await?.is_some() {
            return Err(ServiceError::invalid_argument("Email already exists"));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            login: req.login,
            email: req.email,
            password_hash: password::hash_password(&req.password)?,
            first_name: None,
            last_name: None,
            phone: None,
            date_of_birth: None,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(&user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        Ok(user.into())
    }

    async fn login(&self, login: &str, password_input: &str) -> Result<AuthToken> {
        let user = match self.store.find_by_login(login).await? {
            Some(user) => user,
            None => return Err(ServiceError::unauthenticated("Invalid credentials")),
        };

        if !password::verify_password(password_input, &user.password_hash)? {
            return Err(ServiceError::unauthenticated("Invalid credentials"));
        }

        let access_token = self
            .tokens
            .issue(user.id)
            .map_err(|e| ServiceError::internal(format!("token issuance failed: {}", e)))?;

        tracing::info!(user_id = %user.id, "login succeeded");

        Ok(AuthToken { access_token })
    }

    async fn get_profile(&self, id: Uuid, requester: Uuid) -> Result<UserProfile> {
        Self::check_same_user(id, requester)?;

        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))?;

        Ok(user.into())
    }

    async fn update_profile(
        &self,
        id: Uuid,
        requester: Uuid,
        fields: UpdateProfileFields,
    ) -> Result<UserProfile> {
        Self::check_same_user(id, requester)?;

        let mut user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User not found"))?;

        if let Some(email) = &fields.email {
            validators::validate_email(email)?;
            if let Some(existing) = self.store.find_by_email(email).await? {
                if existing.id != id {
                    return Err(ServiceError::invalid_argument("Email already exists"));
                }
            }
        }

        if let Some(email) = fields.email {
            user.email = email;
        }
        if let Some(first_name) = fields.first_name {
            user.first_name = Some(first_name);
        }
        if let Some(last_name) = fields.last_name {
            user.last_name = Some(last_name);
        }
        if let Some(phone) = fields.phone {
            user.phone = Some(phone);
        }
        if let Some(date_of_birth) = fields.date_of_birth {
            user.date_of_birth = Some(date_of_birth);
        }
        user.updated_at = Utc::now();

        self.store.save(&user).await?;

        Ok(user.into())
    }
}
