//! Storage layer for posts.

mod post_store;

pub use post_store::{PgPostStore, PostStore};
