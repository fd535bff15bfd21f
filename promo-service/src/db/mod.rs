//! Storage layer for promos.

mod promo_store;

pub use promo_store::{PgPromoStore, PromoStore};
