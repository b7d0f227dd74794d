//! Admin session models

use serde::{Deserialize, Serialize};

/// Admin login request payload
#[derive(Debug, Clone, Serialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

/// Response to a successful admin login
#[derive(Debug, Clone, Deserialize)]
pub struct AdminLoginResponse {
    pub message: String,
    pub username: String,
}
