//! Admin session gate and catalog management
//!
//! The admin session is a separate trust domain from the user session: a
//! backend-validated login sets a bare persisted flag, with no token the
//! server could later invalidate. It is deliberately kept decoupled from
//! the user SessionStore rather than merged into a shared role field.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;
use crate::api::ApiClient;
use crate::models::{AdminCredentials, AdminLoginResponse, Event, EventDraft, EventPatch, EventRegistrations};
use crate::session::StateStorage;
use crate::utils::errors::{EventHiveError, Result};
use crate::utils::logging;

const FLAG_SET: &str = "true";

/// Administrative session gate with event catalog authority
#[derive(Debug)]
pub struct AdminGate {
    client: ApiClient,
    storage: StateStorage,
    flag_key: String,
    is_admin: AtomicBool,
}

impl AdminGate {
    /// Create a new, closed AdminGate
    pub fn new(client: ApiClient, storage: StateStorage, flag_key: impl Into<String>) -> Self {
        Self {
            client,
            storage,
            flag_key: flag_key.into(),
            is_admin: AtomicBool::new(false),
        }
    }

    /// Load the persisted admin flag; returns whether it was set
    pub async fn hydrate(&self) -> Result<bool> {
        let persisted = matches!(
            self.storage.get(&self.flag_key).await?.as_deref(),
            Some(FLAG_SET)
        );
        self.is_admin.store(persisted, Ordering::SeqCst);

        Ok(persisted)
    }

    /// Open an admin session against backend-validated credentials
    ///
    /// The flag is set and persisted only after the backend accepts the
    /// credentials; a rejection surfaces as `Auth` and leaves the gate
    /// closed.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let credentials = AdminCredentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        let response: AdminLoginResponse = self
            .client
            .post_json(&["admin", "login"], &credentials, None)
            .await?;

        self.storage.set(&self.flag_key, FLAG_SET).await?;
        self.is_admin.store(true, Ordering::SeqCst);
        logging::log_admin_action("login", Some(&response.username));

        Ok(())
    }

    /// Whether an admin session is open
    pub fn is_admin(&self) -> bool {
        self.is_admin.load(Ordering::SeqCst)
    }

    /// Close the admin session and clear the persisted flag
    pub async fn logout(&self) -> Result<()> {
        self.is_admin.store(false, Ordering::SeqCst);
        info!("Admin session closed");
        self.storage.remove(&self.flag_key).await
    }

    /// Create a new catalog event
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        self.require_admin()?;
        if draft.name.trim().is_empty() {
            return Err(EventHiveError::Validation("Event name must not be empty".to_string()));
        }

        let event: Event = self.client.post_json(&["events"], draft, None).await?;
        info!(event_id = %event.id, "Event created");

        Ok(event)
    }

    /// Apply a partial update to an existing event
    pub async fn update_event(&self, event_id: &str, patch: &EventPatch) -> Result<Event> {
        self.require_admin()?;

        let event: Event = self
            .client
            .put_json(&["events", event_id], patch, None)
            .await?;
        info!(event_id = %event.id, "Event updated");

        Ok(event)
    }

    /// Delete an event and, on the backend, its registrations
    pub async fn delete_event(&self, event_id: &str) -> Result<()> {
        self.require_admin()?;
        self.client.delete(&["events", event_id], None).await?;
        logging::log_admin_action("delete_event", Some(event_id));

        Ok(())
    }

    /// Fetch the full registration list for an event
    pub async fn event_registrations(&self, event_id: &str) -> Result<EventRegistrations> {
        self.require_admin()?;
        self.client
            .get_json(&["registrations", event_id], &[], None)
            .await
    }

    fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(EventHiveError::Auth("Admin session required".to_string()))
        }
    }
}
