//! Wire request/response shapes.
//!
//! Request bodies use `Option<T>` for updatable fields: a key that is absent
//! from the payload leaves the field untouched, a key that is present is
//! applied as-is, empty strings and `false` included. Timestamps are emitted
//! as RFC 3339 strings.

use chrono::NaiveDate;
use content_service::models::Post;
use content_service::{NewPost, UpdatePostFields};
use identity_service::UpdateProfileFields;
use promo_service::models::Promo;
use promo_service::{NewPromo, UpdatePromoFields};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Authentication
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    pub login: String,
    pub password: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub login: String,
    pub password: String,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

impl From<UpdateUserBody> for UpdateProfileFields {
    fn from(body: UpdateUserBody) -> Self {
        UpdateProfileFields {
            email: body.email,
            first_name: body.first_name,
            last_name: body.last_name,
            phone: body.phone,
            date_of_birth: body.date_of_birth,
        }
    }
}

// ============================================================================
// Posts
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePostBody {
    pub title: String,
    pub description: Option<String>,
    pub is_private: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl CreatePostBody {
    pub fn into_new_post(self, creator_id: Uuid) -> NewPost {
        NewPost {
            title: self.title,
            description: self.description,
            creator_id,
            is_private: self.is_private,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub is_private: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl From<UpdatePostBody> for UpdatePostFields {
    fn from(body: UpdatePostBody) -> Self {
        UpdatePostFields {
            title: body.title,
            description: body.description,
            is_private: body.is_private,
            tags: body.tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostJson {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub is_private: bool,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Post> for PostJson {
    fn from(post: Post) -> Self {
        PostJson {
            id: post.id,
            title: post.title,
            description: post.description,
            creator_id: post.creator_id,
            is_private: post.is_private,
            tags: post.tags,
            created_at: post.created_at.to_rfc3339(),
            updated_at: post.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPostsJson {
    pub posts: Vec<PostJson>,
    pub total: i64,
}

// ============================================================================
// Promos
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePromoBody {
    pub name: String,
    pub description: Option<String>,
    pub discount: f64,
    pub code: String,
}

impl CreatePromoBody {
    pub fn into_new_promo(self, creator_id: Uuid) -> NewPromo {
        NewPromo {
            name: self.name,
            description: self.description,
            creator_id,
            discount: self.discount,
            code: self.code,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdatePromoBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount: Option<f64>,
    pub code: Option<String>,
}

impl From<UpdatePromoBody> for UpdatePromoFields {
    fn from(body: UpdatePromoBody) -> Self {
        UpdatePromoFields {
            name: body.name,
            description: body.description,
            discount: body.discount,
            code: body.code,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromoJson {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub discount: f64,
    pub code: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Promo> for PromoJson {
    fn from(promo: Promo) -> Self {
        PromoJson {
            id: promo.id,
            name: promo.name,
            description: promo.description,
            creator_id: promo.creator_id,
            discount: promo.discount,
            code: promo.code,
            created_at: promo.created_at.to_rfc3339(),
            updated_at: promo.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPromosJson {
    pub promos: Vec<PromoJson>,
    pub total: i64,
}

// ============================================================================
// Shared
// ============================================================================

/// Pagination query parameters; missing values fall back to page 1, 10 per
/// page, and the services clamp non-positive values the same way.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self) -> i64 {
        self.per_page.unwrap_or(10)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteJson {
    pub success: bool,
}
