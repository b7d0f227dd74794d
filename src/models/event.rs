//! Event model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog event as served by the backend
///
/// Ids are opaque strings minted by the server; `date` is the
/// human-entered event date and is not interpreted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a new event (admin authority)
#[derive(Debug, Clone, Serialize)]
pub struct EventDraft {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
}

/// Partial update for an existing event (admin authority)
///
/// Absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
