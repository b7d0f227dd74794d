//! Services module
//!
//! Business logic services over the EventHive API.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod registration;

// Re-export commonly used services
pub use admin::AdminGate;
pub use auth::AuthService;
pub use catalog::EventCatalogService;
pub use registration::RegistrationService;

use std::sync::Arc;
use crate::api::ApiClient;
use crate::config::Settings;
use crate::routing::RouteGuard;
use crate::session::{SessionStore, StateStorage};
use crate::utils::errors::Result;

/// Service factory for creating and wiring all services
///
/// The single injection point for session state: every component that
/// needs the session receives it from here instead of reaching for an
/// ambient singleton.
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub catalog_service: EventCatalogService,
    pub registration_service: RegistrationService,
    pub admin_gate: Arc<AdminGate>,
    pub session: Arc<SessionStore>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = ApiClient::new(&settings.api)?;
        let storage = StateStorage::new(&settings.storage);

        let session = Arc::new(SessionStore::new(
            storage.clone(),
            settings.storage.token_key.clone(),
        ));
        let admin_gate = Arc::new(AdminGate::new(
            client.clone(),
            storage,
            settings.storage.admin_flag_key.clone(),
        ));

        let auth_service = AuthService::new(
            client.clone(),
            Arc::clone(&session),
            settings.auth.clone(),
        );
        let catalog_service = EventCatalogService::new(client.clone());
        let registration_service = RegistrationService::new(client);

        Ok(Self {
            auth_service,
            catalog_service,
            registration_service,
            admin_gate,
            session,
        })
    }

    /// Build a route guard over the two session domains
    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(Arc::clone(&self.session), Arc::clone(&self.admin_gate))
    }
}
