//! Data model for the promotion service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A promotional code. `code` is globally unique across all promos;
/// `creator_id` is immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Promo {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub discount: f64,
    pub code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPromo {
    pub name: String,
    pub description: Option<String>,
    pub creator_id: Uuid,
    pub discount: f64,
    pub code: String,
}

/// Partial update; `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePromoFields {
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount: Option<f64>,
    pub code: Option<String>,
}

/// Pagination arguments before clamping. Same rules as posts: non-positive
/// values fall back to page 1 and 10 items per page.
#[derive(Debug, Clone, Copy)]
pub struct ListParams {
    pub page: i64,
    pub per_page: i64,
}

impl ListParams {
    pub fn clamped(self) -> (i64, i64) {
        let page = if self.page > 0 { self.page } else { 1 };
        let per_page = if self.per_page > 0 { self.per_page } else { 10 };
        (page, per_page)
    }

    pub fn offset(self) -> i64 {
        let (page, per_page) = self.clamped();
        (page - 1) * per_page
    }
}

/// One page of promos; `total` counts every promo owned by the creator.
#[derive(Debug, Clone, Serialize)]
pub struct PromoPage {
    pub promos: Vec<Promo>,
    pub total: i64,
}
