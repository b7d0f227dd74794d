//! EventHive client
//!
//! Main application entry point: wires configuration, logging, and the
//! service layer, restores persisted sessions, and prints the current
//! event catalog.

use tracing::{info, warn};

use eventhive_client::{
    config::Settings,
    routing::RouteKind,
    services::ServiceFactory,
    utils::{helpers, logging},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard must outlive main for file logs to flush
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting EventHive client...");

    let services = ServiceFactory::new(&settings)?;

    // Restore persisted sessions from previous runs
    match services.auth_service.restore_session().await {
        Ok(Some(user)) => info!(user_id = %user.id, email = %user.email, "Restored user session"),
        Ok(None) => info!("No user session to restore"),
        Err(e) => warn!(error = %e, "Could not restore user session"),
    }
    if services.admin_gate.hydrate().await? {
        info!("Restored admin session");
    }

    let guard = services.route_guard();
    info!(
        user_views = guard.can_enter(RouteKind::UserOnly),
        admin_views = guard.can_enter(RouteKind::AdminOnly),
        "Navigation state resolved"
    );

    // Show the current catalog
    let events = services.catalog_service.list_events(None).await?;
    info!(count = events.len(), "Fetched event catalog");

    for event in &events {
        let attending = match services.catalog_service.registration_count(&event.id).await {
            Ok(count) => count,
            Err(e) => {
                warn!(event_id = %event.id, error = %e, "Could not fetch registration count");
                0
            }
        };
        println!(
            "{}  {} @ {} ({} attending)",
            event.date, event.name, event.location, attending
        );
        if !event.description.is_empty() {
            println!("    {}", helpers::truncate_text(&event.description, 76));
        }
    }

    Ok(())
}
