//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the EventHive client.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// Returns the worker guard for the file appender when file logging is
/// enabled; the caller must keep it alive for buffered log lines to flush.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let registry = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout));

    let guard = match &config.file_path {
        Some(file_path) => {
            let file_appender = tracing_appender::rolling::daily(file_path, "eventhive.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
                .init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log authentication events with structured data
pub fn log_auth_event(email: &str, action: &str, success: bool) {
    if success {
        info!(email = email, action = action, "Authentication event: success");
    } else {
        warn!(email = email, action = action, "Authentication event: failure");
    }
}

/// Log registration workflow actions
pub fn log_registration_action(event_id: &str, action: &str, authenticated: bool) {
    info!(
        event_id = event_id,
        action = action,
        authenticated = authenticated,
        "Registration action performed"
    );
}

/// Log admin actions
pub fn log_admin_action(action: &str, target: Option<&str>) {
    warn!(action = action, target = target, "Admin action performed");
}
