//! Data models module
//!
//! This module contains all wire-level data structures exchanged with the
//! EventHive backend.

pub mod admin;
pub mod event;
pub mod registration;
pub mod user;

// Re-export commonly used models
pub use admin::{AdminCredentials, AdminLoginResponse};
pub use event::{Event, EventDraft, EventPatch};
pub use registration::{
    AttendeeRecord, EventRegistrations, Registration, RegistrationCount, RegistrationRequest,
};
pub use user::{AuthResponse, Credentials, ProfileUpdate, SignupRequest, User};
