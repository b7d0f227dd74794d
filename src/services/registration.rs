//! Registration workflow service
//!
//! Creates, lists, and cancels event registrations for the current actor.
//! Registrations can be made anonymously with only a name and email, or
//! tied to an authenticated user by passing the session token.

use tracing::info;
use crate::api::ApiClient;
use crate::models::{Registration, RegistrationRequest};
use crate::utils::errors::{EventHiveError, Result};
use crate::utils::{helpers, logging};

/// Registration workflow over the EventHive API
#[derive(Debug, Clone)]
pub struct RegistrationService {
    client: ApiClient,
}

impl RegistrationService {
    /// Create a new RegistrationService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Register for an event
    ///
    /// With a token the registration is associated with the authenticated
    /// user; without one it is anonymous and carries only the submitted
    /// name and email. Duplicate registrations are rejected by the backend
    /// and surface as `Conflict`.
    pub async fn register(
        &self,
        event_id: &str,
        name: &str,
        email: &str,
        token: Option<&str>,
    ) -> Result<Registration> {
        let name = helpers::normalize_whitespace(name);
        if name.is_empty() {
            return Err(EventHiveError::Validation("Name must not be empty".to_string()));
        }
        if !helpers::is_valid_email(email) {
            return Err(EventHiveError::Validation(format!("Invalid email address: {}", email)));
        }

        let request = RegistrationRequest {
            event_id: event_id.to_string(),
            name,
            email: email.to_string(),
        };
        let registration: Registration =
            self.client.post_json(&["register"], &request, token).await?;
        logging::log_registration_action(&registration.event.id, "register", token.is_some());

        Ok(registration)
    }

    /// List the authenticated user's registrations
    pub async fn list_my_registrations(&self, token: &str) -> Result<Vec<Registration>> {
        self.client
            .get_json(&["user", "registrations"], &[], Some(token))
            .await
    }

    /// Cancel a registration owned by the authenticated user
    ///
    /// Callers are expected to have obtained the user's confirmation
    /// before invoking this. A registration that does not exist or does
    /// not belong to the caller surfaces as `NotFound`.
    pub async fn cancel_registration(&self, registration_id: &str, token: &str) -> Result<()> {
        self.client
            .delete(&["registrations", registration_id], Some(token))
            .await?;
        info!(registration_id = registration_id, "Registration cancelled");

        Ok(())
    }
}
