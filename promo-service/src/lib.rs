//! Promotion service
//!
//! Owns the `promos` table: creator ownership for every read and mutation, a
//! global uniqueness constraint on the promo code, and pagination. Unlike
//! posts there is no public visibility; a promo is only ever visible to its
//! creator.

pub mod db;
pub mod models;
pub mod service;

pub use db::{PgPromoStore, PromoStore};
pub use models::{ListParams, NewPromo, Promo, PromoPage, UpdatePromoFields};
pub use service::{PromoApi, PromoService};
