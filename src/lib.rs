//! EventHive client
//!
//! Client-side core of the EventHive event-management application: session
//! state with a persisted token, the event registration workflow, catalog
//! access, and the independent admin session gate, all speaking to the
//! EventHive REST backend.

pub mod api;
pub mod config;
pub mod models;
pub mod routing;
pub mod services;
pub mod session;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventHiveError, Result};

// Re-export main components for easy access
pub use api::ApiClient;
pub use routing::{LoginView, RouteDecision, RouteGuard, RouteKind};
pub use services::{AdminGate, AuthService, EventCatalogService, RegistrationService, ServiceFactory};
pub use session::{SessionStore, StateStorage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
