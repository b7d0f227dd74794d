//! Mock EventHive backend harness
//!
//! Spins up a wiremock server and wires a ServiceFactory against it with
//! an isolated temporary state directory, so each test gets a fresh
//! backend and fresh persisted state.

use tempfile::TempDir;
use wiremock::MockServer;

use eventhive_client::config::{ApiConfig, AuthConfig, LoggingConfig, Settings, StorageConfig};
use eventhive_client::services::ServiceFactory;
use eventhive_client::session::StateStorage;

/// A mock backend plus a fully wired service layer
pub struct TestHarness {
    pub server: MockServer,
    pub services: ServiceFactory,
    pub settings: Settings,
    _state_dir: TempDir,
}

impl TestHarness {
    /// Direct handle on the persisted state, for seeding and inspection
    pub fn storage(&self) -> StateStorage {
        StateStorage::new(&self.settings.storage)
    }

    /// A second factory over the same settings, simulating a restart
    pub fn restarted(&self) -> ServiceFactory {
        ServiceFactory::new(&self.settings).expect("factory over existing settings")
    }
}

/// Build a harness with a running mock server and isolated state
pub async fn harness() -> TestHarness {
    let server = MockServer::start().await;
    let state_dir = TempDir::new().expect("temp state dir");

    let settings = Settings {
        api: ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_seconds: 5,
            user_agent: "eventhive-client-tests".to_string(),
        },
        storage: StorageConfig {
            dir: state_dir.path().to_string_lossy().into_owned(),
            token_key: "session_token".to_string(),
            admin_flag_key: "admin_session".to_string(),
        },
        auth: AuthConfig {
            min_password_length: 8,
        },
        logging: LoggingConfig {
            level: "info".to_string(),
            file_path: None,
        },
    };
    let services = ServiceFactory::new(&settings).expect("service factory");

    TestHarness {
        server,
        services,
        settings,
        _state_dir: state_dir,
    }
}
