//! HTTP gateway module
//!
//! Client plumbing for the EventHive REST API.

pub mod client;

pub use client::ApiClient;
