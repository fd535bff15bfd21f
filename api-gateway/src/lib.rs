//! API Gateway
//!
//! The single REST entry point. Authenticates callers on protected routes,
//! forwards requests to the backend services through [`clients::ServiceClients`],
//! converts domain payloads to and from the wire JSON shapes, and performs
//! the one authoritative translation from backend error outcomes to HTTP
//! statuses. It holds no state, caches nothing, and evaluates no business
//! rules of its own.

pub mod clients;
pub mod config;
pub mod error;
pub mod middleware;
pub mod rest_api;

pub use clients::ServiceClients;
pub use config::Config;
pub use error::GatewayError;
