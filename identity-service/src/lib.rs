//! Identity service
//!
//! Owns user accounts: registration, credential verification, bearer token
//! issuance, and profile reads/updates. Profile access is a strict equality
//! check of the token subject against the requested id; there is no
//! delegation and no admin override.

pub mod db;
pub mod models;
pub mod security;
pub mod service;
pub mod validators;

pub use db::{PgUserStore, UserStore};
pub use models::{AuthToken, RegisterUser, UpdateProfileFields, User, UserProfile};
pub use service::{IdentityApi, IdentityService};
