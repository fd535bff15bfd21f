//! Shared token primitives.
//!
//! The identity service issues bearer tokens and the API gateway verifies
//! them; both go through [`jwt::TokenKeys`] so there is exactly one place
//! that knows the algorithm and claim layout.

pub mod jwt;

pub use jwt::{Claims, TokenError, TokenKeys};
