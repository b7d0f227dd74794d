//! Event catalog service
//!
//! Fetches and searches the public event catalog. Every call is a fresh
//! fetch; the client keeps no catalog cache and tolerates eventual
//! consistency with admin-side mutations.

use tracing::debug;
use crate::api::ApiClient;
use crate::models::{Event, RegistrationCount};
use crate::utils::errors::Result;

/// Read-only view over the event catalog
#[derive(Debug, Clone)]
pub struct EventCatalogService {
    client: ApiClient,
}

impl EventCatalogService {
    /// Create a new EventCatalogService instance
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List events, optionally filtered by a search query
    ///
    /// An empty or whitespace-only query returns the full catalog in
    /// server order; otherwise the server filters on case-insensitive
    /// substrings of name, location, and description.
    pub async fn list_events(&self, search: Option<&str>) -> Result<Vec<Event>> {
        let query: Vec<(&str, &str)> = match search {
            Some(q) if !q.trim().is_empty() => vec![("search", q)],
            _ => Vec::new(),
        };

        let events: Vec<Event> = self.client.get_json(&["events"], &query, None).await?;
        debug!(count = events.len(), filtered = !query.is_empty(), "Fetched event catalog");

        Ok(events)
    }

    /// Fetch a single event by id
    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        self.client.get_json(&["events", event_id], &[], None).await
    }

    /// Fetch the number of registrations for an event
    pub async fn registration_count(&self, event_id: &str) -> Result<u64> {
        let counted: RegistrationCount = self
            .client
            .get_json(&["registrations", event_id], &[], None)
            .await?;

        Ok(counted.count)
    }
}
