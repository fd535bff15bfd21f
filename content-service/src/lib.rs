//! Content service
//!
//! Owns the `posts` table and every rule attached to it: creator ownership for
//! mutation, the public/private visibility rule for reads and listings, and
//! pagination. The API gateway talks to this crate through the [`ContentApi`]
//! trait; no other component evaluates post business rules.

pub mod db;
pub mod models;
pub mod service;

pub use db::{PgPostStore, PostStore};
pub use models::{ListParams, NewPost, Post, PostPage, UpdatePostFields};
pub use service::{ContentApi, PostService};
