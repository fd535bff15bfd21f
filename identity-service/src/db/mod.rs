//! Storage layer for user accounts.

mod users;

pub use users::{PgUserStore, UserStore};
