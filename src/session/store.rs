//! Session store
//!
//! Holds the current authentication token and cached user profile. The
//! token is written through to persistent storage so a session outlives a
//! process restart; the cached user lives only as long as the token it was
//! validated against.

use std::sync::RwLock;
use tracing::{debug, info};
use crate::models::User;
use crate::utils::errors::Result;
use super::storage::StateStorage;

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<User>,
    pending_validation: bool,
}

/// Client-side session state with persisted token
///
/// After construction the store is anonymous; `hydrate` loads a persisted
/// token and leaves the store in a pending-validation state until the
/// profile has been confirmed against the backend.
#[derive(Debug)]
pub struct SessionStore {
    storage: StateStorage,
    token_key: String,
    state: RwLock<SessionState>,
}

impl SessionStore {
    /// Create a new, anonymous session store
    pub fn new(storage: StateStorage, token_key: impl Into<String>) -> Self {
        Self {
            storage,
            token_key: token_key.into(),
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Load a persisted token, if any; returns whether one was found
    ///
    /// A found token puts the store into the pending-validation state; the
    /// cached user stays absent until the token is confirmed.
    pub async fn hydrate(&self) -> Result<bool> {
        let persisted = self.storage.get(&self.token_key).await?;
        let found = persisted.is_some();

        let mut state = self.write_state();
        state.token = persisted;
        state.user = None;
        state.pending_validation = found;
        debug!(token_found = found, "Session store hydrated");

        Ok(found)
    }

    /// Establish an authenticated session, persisting the token
    pub async fn login(&self, token: String, user: User) -> Result<()> {
        self.storage.set(&self.token_key, &token).await?;

        let mut state = self.write_state();
        state.token = Some(token);
        info!(user_id = %user.id, "Session established");
        state.user = Some(user);
        state.pending_validation = false;

        Ok(())
    }

    /// Replace the cached user profile, resolving any pending validation
    ///
    /// Used after a successful profile refresh or update; the token is
    /// left untouched.
    pub fn set_user(&self, user: User) {
        let mut state = self.write_state();
        state.user = Some(user);
        state.pending_validation = false;
    }

    /// Clear the session: cached state first, then the persisted token
    ///
    /// The in-memory state is always cleared, even if removing the
    /// persisted token fails.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut state = self.write_state();
            state.token = None;
            state.user = None;
            state.pending_validation = false;
        }
        info!("Session cleared");
        self.storage.remove(&self.token_key).await
    }

    /// Current bearer token, if any
    pub fn token(&self) -> Option<String> {
        self.read_state().token.clone()
    }

    /// Cached user profile, if the session has been validated
    pub fn current_user(&self) -> Option<User> {
        self.read_state().user.clone()
    }

    /// Whether a token is present (validated or pending)
    pub fn is_authenticated(&self) -> bool {
        self.read_state().token.is_some()
    }

    /// Whether a persisted token is awaiting profile confirmation
    pub fn is_pending_validation(&self) -> bool {
        self.read_state().pending_validation
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }
}
