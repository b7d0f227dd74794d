//! Registration models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::event::Event;

/// A registration as seen by the registering actor
///
/// Carries an embedded snapshot of the event plus the submitted attendee
/// details; for anonymous registrations the name and email are the only
/// identity attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub event: Event,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// Registration request payload
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationRequest {
    pub event_id: String,
    pub name: String,
    pub email: String,
}

/// Per-event attendance count
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationCount {
    pub count: u64,
}

/// A single attendee row in the admin view of an event's registrations
#[derive(Debug, Clone, Deserialize)]
pub struct AttendeeRecord {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// Admin view of an event's registrations
#[derive(Debug, Clone, Deserialize)]
pub struct EventRegistrations {
    pub count: u64,
    pub registrations: Vec<AttendeeRecord>,
}
