//! User model and auth payloads

use serde::{Deserialize, Serialize};

/// Authenticated user profile, cached for the lifetime of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Signup request payload
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request payload
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Profile update payload
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
}

/// Token-bearing response from signup and login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: String,
    pub name: String,
    pub email: String,
}

impl AuthResponse {
    /// Split into the opaque bearer token and the user profile
    pub fn into_parts(self) -> (String, User) {
        let user = User {
            id: self.id,
            name: self.name,
            email: self.email,
        };
        (self.token, user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_into_parts() {
        let json = r#"{"token":"tok-1","id":"u-1","name":"John Doe","email":"john@example.com"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let (token, user) = response.into_parts();
        assert_eq!(token, "tok-1");
        assert_eq!(user.id, "u-1");
        assert_eq!(user.email, "john@example.com");
    }
}
