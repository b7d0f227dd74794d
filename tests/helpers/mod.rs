//! Shared test helpers
//!
//! Harness construction and test data builders used across the
//! integration test suite.

#![allow(dead_code)]

pub mod mock_backend;
pub mod test_data;

pub use mock_backend::{harness, TestHarness};
pub use test_data::*;
