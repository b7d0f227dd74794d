//! Test data builders for backend payloads

use serde_json::{json, Value};

pub fn user_json(id: &str, name: &str, email: &str) -> Value {
    json!({ "id": id, "name": name, "email": email })
}

pub fn auth_response_json(token: &str, id: &str, name: &str, email: &str) -> Value {
    json!({ "token": token, "id": id, "name": name, "email": email })
}

pub fn event_json(id: &str, name: &str, date: &str, location: &str, description: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "date": date,
        "location": location,
        "description": description,
        "created_at": "2025-04-01T09:00:00Z"
    })
}

pub fn registration_json(id: &str, event: &Value, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "event": event,
        "name": name,
        "email": email,
        "registered_at": "2025-05-01T12:00:00Z"
    })
}

pub fn attendee_json(id: &str, event_id: &str, name: &str, email: &str) -> Value {
    json!({
        "id": id,
        "event_id": event_id,
        "name": name,
        "email": email,
        "registered_at": "2025-05-01T12:00:00Z"
    })
}

pub fn error_json(detail: &str) -> Value {
    json!({ "detail": detail })
}

/// A small default catalog used by catalog and search tests
pub fn sample_catalog() -> Vec<Value> {
    vec![
        event_json(
            "e-1",
            "Rust Conference 2025",
            "2025-06-01",
            "Tech Hub, San Francisco",
            "A technology conference about systems programming.",
        ),
        event_json(
            "e-2",
            "Jazz Night",
            "2025-06-15",
            "Blue Note, Berlin",
            "An evening of live jazz.",
        ),
        event_json(
            "e-3",
            "Community Picnic",
            "2025-07-04",
            "Central Park, New York",
            "Bring your own blanket.",
        ),
    ]
}
