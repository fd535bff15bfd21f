//! User account model and the value types crossing the service seam.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user row. `login` and `email` are each globally unique; the password
/// hash never leaves this crate.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile projection returned to callers; deliberately hash-free.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub login: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        UserProfile {
            id: user.id,
            login: user.login,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            date_of_birth: user.date_of_birth,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Registration arguments.
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub login: String,
    pub password: String,
    pub email: String,
}

/// Partial profile update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileFields {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

/// Successful login outcome.
#[derive(Debug, Clone, Serialize)]
pub struct AuthToken {
    pub access_token: String,
}
