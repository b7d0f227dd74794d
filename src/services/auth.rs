//! Authentication service
//!
//! Login, signup, logout, and profile refresh against the EventHive
//! backend. Successful calls write through to the session store; failed
//! calls never mutate it.

use std::sync::Arc;
use tracing::{info, warn};
use crate::api::ApiClient;
use crate::config::AuthConfig;
use crate::models::{AuthResponse, Credentials, ProfileUpdate, SignupRequest, User};
use crate::session::SessionStore;
use crate::utils::errors::{EventHiveError, Result};
use crate::utils::{helpers, logging};

/// Authentication service backed by the session store
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    session: Arc<SessionStore>,
    config: AuthConfig,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(client: ApiClient, session: Arc<SessionStore>, config: AuthConfig) -> Self {
        Self {
            client,
            session,
            config,
        }
    }

    /// Register a new account and establish a session
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let name = helpers::normalize_whitespace(name);
        if name.is_empty() {
            return Err(EventHiveError::Validation("Name must not be empty".to_string()));
        }
        if !helpers::is_valid_email(email) {
            return Err(EventHiveError::Validation(format!("Invalid email address: {}", email)));
        }
        if password.chars().count() < self.config.min_password_length {
            return Err(EventHiveError::Validation(format!(
                "Password must be at least {} characters",
                self.config.min_password_length
            )));
        }

        let request = SignupRequest {
            name,
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .client
            .post_json(&["auth", "signup"], &request, None)
            .await?;

        let (token, user) = response.into_parts();
        self.session.login(token, user.clone()).await?;
        logging::log_auth_event(&user.email, "signup", true);

        Ok(user)
    }

    /// Authenticate with email and password and establish a session
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        if !helpers::is_valid_email(email) {
            return Err(EventHiveError::Validation(format!("Invalid email address: {}", email)));
        }
        if password.is_empty() {
            return Err(EventHiveError::Validation("Password must not be empty".to_string()));
        }

        let request = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = match self
            .client
            .post_json(&["auth", "login"], &request, None)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                if matches!(e, EventHiveError::Auth(_)) {
                    logging::log_auth_event(email, "login", false);
                }
                return Err(e);
            }
        };

        let (token, user) = response.into_parts();
        self.session.login(token, user.clone()).await?;
        logging::log_auth_event(&user.email, "login", true);

        Ok(user)
    }

    /// Re-fetch the profile for the stored token
    ///
    /// Success refreshes the cached user; a rejected token surfaces as an
    /// `Auth` error and leaves the store untouched so the caller decides
    /// whether to force a logout.
    pub async fn refresh_profile(&self) -> Result<User> {
        let token = self.require_token()?;
        let user: User = self.client.get_json(&["auth", "me"], &[], Some(&token)).await?;
        self.session.set_user(user.clone());

        Ok(user)
    }

    /// Update name and email on the current profile
    pub async fn update_profile(&self, name: &str, email: &str) -> Result<User> {
        let name = helpers::normalize_whitespace(name);
        if name.is_empty() {
            return Err(EventHiveError::Validation("Name must not be empty".to_string()));
        }
        if !helpers::is_valid_email(email) {
            return Err(EventHiveError::Validation(format!("Invalid email address: {}", email)));
        }

        let token = self.require_token()?;
        let request = ProfileUpdate {
            name,
            email: email.to_string(),
        };
        let user: User = self
            .client
            .put_json(&["auth", "profile"], &request, Some(&token))
            .await?;
        self.session.set_user(user.clone());
        info!(user_id = %user.id, "Profile updated");

        Ok(user)
    }

    /// Restore a persisted session on startup
    ///
    /// Hydrates the store, then validates any persisted token against the
    /// backend. A rejected token forces a logout and resolves to an
    /// anonymous session; transport failures propagate without mutating
    /// session state.
    pub async fn restore_session(&self) -> Result<Option<User>> {
        if !self.session.hydrate().await? {
            return Ok(None);
        }

        match self.refresh_profile().await {
            Ok(user) => Ok(Some(user)),
            Err(EventHiveError::Auth(reason)) => {
                warn!(reason = %reason, "Persisted token rejected, clearing session");
                self.session.logout().await?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Clear the session; always succeeds in clearing the cached state
    pub async fn logout(&self) -> Result<()> {
        self.session.logout().await
    }

    fn require_token(&self) -> Result<String> {
        self.session
            .token()
            .ok_or_else(|| EventHiveError::Auth("No session token present".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::config::{ApiConfig, StorageConfig};
    use crate::session::StateStorage;

    fn service_in(dir: &std::path::Path) -> AuthService {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:1/api".to_string(),
            timeout_seconds: 1,
            user_agent: "test".to_string(),
        })
        .unwrap();
        let storage = StateStorage::new(&StorageConfig {
            dir: dir.to_string_lossy().into_owned(),
            token_key: "session_token".to_string(),
            admin_flag_key: "admin_session".to_string(),
        });
        let session = Arc::new(SessionStore::new(storage, "session_token"));
        AuthService::new(client, session, AuthConfig { min_password_length: 8 })
    }

    // Input validation fails before any request is issued, so no server
    // is needed for these cases.

    #[tokio::test]
    async fn test_signup_rejects_malformed_email() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());
        let result = service.signup("John Doe", "not-an-email", "longenough").await;
        assert_matches!(result, Err(EventHiveError::Validation(_)));
    }

    #[tokio::test]
    async fn test_signup_rejects_empty_name() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());
        let result = service.signup("   ", "john@example.com", "longenough").await;
        assert_matches!(result, Err(EventHiveError::Validation(_)));
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());
        let result = service.signup("John", "john@example.com", "short").await;
        assert_matches!(result, Err(EventHiveError::Validation(_)));
    }

    #[tokio::test]
    async fn test_refresh_without_token_is_auth_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());
        let result = service.refresh_profile().await;
        assert_matches!(result, Err(EventHiveError::Auth(_)));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_bad_input() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_in(dir.path());
        let result = service.update_profile("", "john@example.com").await;
        assert_matches!(result, Err(EventHiveError::Validation(_)));
        let result = service.update_profile("John", "nope").await;
        assert_matches!(result, Err(EventHiveError::Validation(_)));
    }
}
