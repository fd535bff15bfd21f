//! Handles to the backend services.
//!
//! Each backend is reached through its API trait, so tests can swap in
//! doubles and the gateway stays independent of how a service is deployed.

use content_service::ContentApi;
use identity_service::IdentityApi;
use promo_service::PromoApi;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceClients {
    pub identity: Arc<dyn IdentityApi>,
    pub content: Arc<dyn ContentApi>,
    pub promos: Arc<dyn PromoApi>,
}

impl ServiceClients {
    pub fn new(
        identity: Arc<dyn IdentityApi>,
        content: Arc<dyn ContentApi>,
        promos: Arc<dyn PromoApi>,
    ) -> Self {
        Self {
            identity,
            content,
            promos,
        }
    }
}
